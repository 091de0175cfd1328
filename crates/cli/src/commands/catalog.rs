//! Product and category browsing commands.

use mangust_core::PageRequest;

use super::{CliError, client, print_page_footer};

/// List products, optionally restricted to one category.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn list_products(category: Option<&str>, page: PageRequest) -> Result<(), CliError> {
    let api = client()?;
    let result = api.list_products(category, page).await?;

    for product in &result.items {
        let id = if product.id.is_empty() { "?" } else { product.id.as_str() };
        println!(
            "{id}  {}  {:.2}  stock {}  {}",
            product.name,
            product.price,
            product.stock,
            product
                .category
                .as_ref()
                .map_or("-", |category| category.name.as_str()),
        );
    }

    print_page_footer(page.page(), page.limit(), &result);
    Ok(())
}

/// Show one product with its reviews.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn show_product(id: &str) -> Result<(), CliError> {
    let api = client()?;
    let product = api.get_product(id).await?;

    println!("{}  ({})", product.name, product.id);
    println!("price {:.2}  stock {}", product.price, product.stock);
    if !product.description.is_empty() {
        println!("{}", product.description);
    }
    match &product.category {
        Some(category) => println!("category: {} ({})", category.name, category.id),
        None => println!("category: {}", product.category_id),
    }
    for review in &product.reviews {
        println!("  {}/5 {} - {}", review.rating, review.user_name, review.comment);
    }
    Ok(())
}

/// List categories.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn list_categories(page: PageRequest) -> Result<(), CliError> {
    let api = client()?;
    let result = api.list_categories(page).await?;

    for category in &result.items {
        println!("{}  {}  {}", category.id, category.name, category.description);
    }

    print_page_footer(page.page(), page.limit(), &result);
    Ok(())
}
