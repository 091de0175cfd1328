//! Account, profile, and wishlist commands.

use mangust_core::PageRequest;

use super::{CliError, authenticated_client, print_page_footer};

/// List all accounts (admin).
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn list_users() -> Result<(), CliError> {
    let api = authenticated_client()?;
    let result = api.list_users().await?;

    for user in &result.items {
        println!("{}  {}  {}  {}", user.id, user.name, user.email, user.role);
    }

    println!();
    println!(
        "{} accounts (total {})",
        result.items.len(),
        result
            .total
            .map_or_else(|| "unknown".to_string(), |t| t.to_string())
    );
    Ok(())
}

/// List the authenticated user's wishlist.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn list_wishlist(page: PageRequest) -> Result<(), CliError> {
    let api = authenticated_client()?;
    let result = api.list_wishlist(page).await?;

    for item in &result.items {
        match &item.product {
            Some(product) => println!("{}  {}  {:.2}", item.id, product.name, product.price),
            None => println!("{}  {}", item.id, item.product_id),
        }
    }

    print_page_footer(page.page(), page.limit(), &result);
    Ok(())
}

/// Show the authenticated profile.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn show_profile() -> Result<(), CliError> {
    let api = authenticated_client()?;
    let profile = api.get_profile().await?;

    println!("{} <{}>  {}", profile.name, profile.email, profile.role);
    if let Some(phone) = &profile.phone {
        println!("phone: {phone}");
    }
    if let Some(address) = &profile.address {
        println!("address: {address}");
    }
    Ok(())
}
