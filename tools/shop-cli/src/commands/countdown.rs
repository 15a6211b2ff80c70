//! Promotion countdown command.

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use serde_json::json;
use shop_storefront::widgets::{Countdown, Remaining};

use super::CountdownArgs;
use crate::context::Context;

/// Run the countdown command.
pub fn run(args: CountdownArgs, ctx: &Context) -> Result<()> {
    let target = DateTime::parse_from_rfc3339(&args.until)
        .with_context(|| format!("Invalid date-time: {}", args.until))?
        .with_timezone(&Utc);

    let remaining = Countdown::new(target).remaining(Utc::now());

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "target": target,
            "remaining": remaining,
            "expired": remaining.is_none(),
        }));
        return Ok(());
    }

    match remaining {
        Some(r) => ctx.output.kv("Còn lại", &format_remaining(&r)),
        None => ctx.output.kv("Còn lại", "EXPIRED"),
    }
    Ok(())
}

fn format_remaining(r: &Remaining) -> String {
    format!(
        "{}d {:02}h {:02}m {:02}s",
        r.days, r.hours, r.minutes, r.seconds
    )
}
