mod home;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use state::{NO_NEW_WORDS, NO_TENSE_SELECTED, ViewError};
