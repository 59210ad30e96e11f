//! Application services for user accounts.

mod accounts;

pub use accounts::{
    RegisterUserRequest, UserAccountError, UserAccountResult, UserAccountService,
};
