//! Order browsing commands.

use mangust_client::api::OrderFilter;
use mangust_core::{OrderStatus, PageRequest};

use super::{CliError, authenticated_client, print_page_footer};

/// List orders visible to the authenticated account.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn list(page: PageRequest) -> Result<(), CliError> {
    let api = authenticated_client()?;
    let result = api.list_orders(page).await?;

    for order in &result.items {
        let buyer = order
            .user
            .as_ref()
            .map_or(order.user_id.as_str(), |user| user.name.as_str());
        println!(
            "{}  {}  {:.2}  {}  {} items",
            order.id,
            buyer,
            order.total,
            order.status,
            order.items.len()
        );
    }

    print_page_footer(page.page(), page.limit(), &result);
    Ok(())
}

/// Search orders with filters (admin).
///
/// # Errors
///
/// Returns an error if the request fails or the status flag is not a valid
/// order status.
pub async fn find(
    order: Option<String>,
    user: Option<String>,
    status: Option<String>,
    page: PageRequest,
) -> Result<(), CliError> {
    let status = status
        .map(|s| {
            s.parse::<OrderStatus>()
                .map_err(CliError::InvalidArgument)
        })
        .transpose()?;

    let api = authenticated_client()?;
    let filter = OrderFilter {
        order_id: order,
        user_id: user,
        status,
    };
    let result = api.find_orders(&filter, page).await?;

    for order in &result.items {
        println!("{}  {}  {:.2}  {}", order.id, order.user_id, order.total, order.status);
    }

    print_page_footer(page.page(), page.limit(), &result);
    Ok(())
}

/// Show one order with its line items.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn show(id: &str) -> Result<(), CliError> {
    let api = authenticated_client()?;
    let order = api.get_order(id).await?;

    println!("order {}  {}  total {:.2}", order.id, order.status, order.total);
    match &order.user {
        Some(user) => println!("buyer: {} <{}>", user.name, user.email),
        None => println!("buyer: {}", order.user_id),
    }
    for item in &order.items {
        let name = item
            .product
            .as_ref()
            .map_or(item.product_id.as_str(), |product| product.name.as_str());
        println!(
            "  {} x{}  @ {:.2}  = {:.2}",
            name, item.quantity, item.price, item.line_total
        );
    }
    Ok(())
}
