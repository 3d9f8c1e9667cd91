//! Tests for the admin login, logout and supervisor mode endpoints.

mod login;
mod logout;

use super::*;
