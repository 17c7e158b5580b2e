//! Session commands: login, logout, status

use crate::{
    core::{clear_session, save_session},
    supabase::{SignUp, User},
    AutopilotError, Result,
};

use super::CommandContext;

/// Handle `auth login`
pub async fn handle_login(
    ctx: &CommandContext,
    email: &str,
    password: &str,
    sign_up: bool,
) -> Result<()> {
    let client = ctx.anon_client()?;

    let session = if sign_up {
        match client.sign_up(email, password).await? {
            SignUp::Session(session) => {
                println!("✓ Account created");
                session
            }
            SignUp::ConfirmationPending(user) => {
                println!(
                    "✓ Account created for {}. Check your email to confirm it, then run `auth login`.",
                    display_user(&user)
                );
                return Ok(());
            }
        }
    } else {
        client.sign_in_with_password(email, password).await?
    };

    save_session(&ctx.session_path, &session)?;
    tracing::info!(user_id = %session.user.id, "signed in");
    println!("✓ Signed in as {}", display_user(&session.user));
    Ok(())
}

/// Handle `auth logout`
pub async fn handle_logout(ctx: &CommandContext) -> Result<()> {
    if ctx.session.is_some() {
        // The local session is dropped even if the service is unreachable.
        if let Err(error) = ctx.user_client()?.sign_out().await {
            tracing::warn!(%error, "remote sign-out failed");
        }
    }

    if clear_session(&ctx.session_path)? {
        println!("✓ Signed out");
    } else {
        println!("Not signed in");
    }
    Ok(())
}

/// Handle `auth status`
pub async fn handle_status(ctx: &CommandContext) -> Result<()> {
    if ctx.session.is_none() {
        println!("Not signed in");
        return Ok(());
    }

    match ctx.user_client()?.get_user().await {
        Ok(user) => {
            println!("Signed in as {}", display_user(&user));
            println!("User ID: {}", user.id);
            Ok(())
        }
        Err(AutopilotError::NotAuthenticated) => {
            println!("Session expired. Run `auth login` again.");
            Ok(())
        }
        Err(error) => Err(error),
    }
}

/// Email when known, otherwise the user id.
pub fn display_user(user: &User) -> String {
    user.email
        .clone()
        .filter(|email| !email.is_empty())
        .unwrap_or_else(|| user.id.to_string())
}
