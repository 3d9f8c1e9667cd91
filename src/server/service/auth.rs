use crate::{
    model::auth::{AdminDto, LoginDto},
    server::{
        error::{auth::AuthError, Error},
        model::app::Credentials,
    },
};

/// Checks login attempts against the configured admin account and supervisor password.
pub struct AuthService<'a> {
    credentials: &'a Credentials,
}

impl<'a> AuthService<'a> {
    pub fn new(credentials: &'a Credentials) -> Self {
        Self { credentials }
    }

    /// Validates admin credentials, the email is compared ignoring case and surrounding spaces.
    ///
    /// # Returns
    /// - `Ok(AdminDto)` - The configured admin email
    /// - `Err(AuthError::InvalidCredentials)` - Email or password do not match
    pub fn login(&self, login: &LoginDto) -> Result<AdminDto, Error> {
        let email_matches = login
            .email
            .trim()
            .eq_ignore_ascii_case(self.credentials.admin_email.trim());

        if !email_matches || login.password != self.credentials.admin_password {
            return Err(AuthError::InvalidCredentials(login.email.clone()).into());
        }

        Ok(AdminDto {
            email: self.credentials.admin_email.clone(),
        })
    }

    pub fn supervisor_login(&self, password: &str) -> Result<(), Error> {
        if password != self.credentials.supervisor_password {
            return Err(AuthError::InvalidSupervisorPassword.into());
        }

        Ok(())
    }
}
