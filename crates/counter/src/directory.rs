use std::collections::HashMap;

use slack::{collect_all, Result, SlackApi};

/// Snapshot of admin user ids mapped to display names; the eligibility
/// filter for one cycle. Listing failures abort the cycle.
pub async fn admin_directory<C: SlackApi>(api: &C) -> Result<HashMap<String, String>> {
    let members = collect_all(|cursor| api.list_users(cursor)).await?;

    Ok(members
        .into_iter()
        .filter(|member| member.is_admin)
        .map(|member| {
            let name = member.display_name();
            (member.id, name)
        })
        .collect())
}
