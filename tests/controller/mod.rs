//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, then the response status and JSON body
//! are checked.

mod auth;
mod exam;
mod schedule;
mod staff;

use reposit_test_utils::prelude::*;

use crate::util::{body_json, enter_supervisor, into_response, login_admin};
