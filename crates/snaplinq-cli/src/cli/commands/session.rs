//! `snaplinq login|logout|whoami` – local session management.

use anyhow::Result;
use snaplinq_core::auth::{AuthProvider, LocalAuth};

pub fn run_login(auth: &LocalAuth, identity: &str) -> Result<()> {
    let session = auth.sign_in(identity)?;
    println!("Signed in as {}", session.identity);
    Ok(())
}

pub fn run_logout(auth: &LocalAuth) -> Result<()> {
    match auth.current_session() {
        Some(s) => {
            auth.sign_out()?;
            println!("Signed out {}", s.identity);
        }
        None => println!("Not signed in."),
    }
    Ok(())
}

pub fn run_whoami(auth: &LocalAuth) {
    match auth.current_session() {
        Some(s) => println!("{} (user id: {})", s.identity, s.user_id),
        None => println!("Not signed in."),
    }
}
