//! Client-side checks for the signup form, mirroring what the backend enforces
//! so obvious mistakes are caught before a round trip.

use api::SignupRequest;

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn validate_signup(request: &SignupRequest) -> Result<(), String> {
    let fields = [
        &request.firstname,
        &request.lastname,
        &request.username,
        &request.email,
        &request.password,
        &request.confirmpassword,
    ];
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err("All fields are required".to_string());
    }
    if !request.email.contains('@') {
        return Err("Please enter a valid email".to_string());
    }
    if request.password != request.confirmpassword {
        return Err("Passwords do not match".to_string());
    }
    if request.password.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }
    Ok(())
}
