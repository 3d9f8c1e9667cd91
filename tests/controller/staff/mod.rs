//! Tests for the staff entity selection endpoints.

mod entity;

use super::*;
