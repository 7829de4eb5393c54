use tunelax::{Listing, Store, Studio};

/// Format whole lira with dot-grouped thousands, e.g. `₺95.000`
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("₺{}", grouped)
}

pub fn print_listing(index: usize, listing: &Listing) {
    println!("{}. {} ({})", index, listing.title, format_price(listing.price));
    println!("   {} · {} · {}", listing.condition, listing.category, listing.city);
    println!("   Seller: {}, posted {}", listing.user_name, listing.created_at);
    println!("   ID: {}", listing.id);
    println!();
}

pub fn print_store(index: usize, store: &Store) {
    let verified = if store.is_verified { " ✓" } else { "" };
    println!("{}. {}{}", index, store.name, verified);
    println!(
        "   {} · {:.1} ({} reviews)",
        store.city, store.rating, store.review_count
    );
    println!("   Brands: {}", store.brands.join(", "));
    println!("   ID: {}", store.id);
    println!();
}

pub fn print_store_detail(store: &Store) {
    print_store(1, store);
    for product in &store.products {
        println!(
            "   - {} [{}] {} (stock {})",
            product.name,
            product.brand,
            format_price(product.price),
            product.stock
        );
    }
    if !store.products.is_empty() {
        println!();
    }
}

pub fn print_studio(index: usize, studio: &Studio) {
    println!(
        "{}. {} ({}/hour, {}/day)",
        index,
        studio.name,
        format_price(studio.hourly_rate),
        format_price(studio.daily_rate)
    );
    println!(
        "   {} · {} · {:.1} ({} reviews)",
        studio.city, studio.room_size, studio.rating, studio.review_count
    );
    println!("   Equipment: {}", studio.equipment.join(", "));
    println!("   ID: {}", studio.id);
    println!();
}
