//! Login marker commands.

use anyhow::Result;
use serde_json::json;
use shop_cache::Session;

use super::LoginArgs;
use crate::context::Context;

/// Store a login marker for `name`.
pub fn login(args: LoginArgs, ctx: &Context) -> Result<()> {
    let cache = ctx.open_cache()?;
    Session::new(&cache).login(&json!({ "name": args.name }))?;
    ctx.output.success(&format!("Logged in as {}", args.name));
    Ok(())
}

/// Remove the login marker.
pub fn logout(ctx: &Context) -> Result<()> {
    let cache = ctx.open_cache()?;
    let session = Session::new(&cache);
    if !session.is_logged_in()? {
        ctx.output.info("Not logged in.");
    }
    session.logout()?;
    ctx.output.success("Logged out");
    Ok(())
}
