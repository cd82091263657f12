pub mod address;
pub mod balance;
pub mod token;

pub mod prelude {
    pub use super::address::*;
    pub use super::balance::*;
    pub use super::token::*;
}
