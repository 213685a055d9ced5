//! Startup seeding.
//!
//! The administrator account is always created from configuration; demo
//! users and listings are seeded only when `CURIO_SEED_DEMO` is enabled.

use chrono::{Duration, Utc};
use secrecy::ExposeSecret as _;

use curio_core::{Category, ListingId, Price, PurchaseId, Role, UserId};

use crate::config::ServerConfig;
use crate::models::{Listing, PurchaseRecord, User};
use crate::services::AuthError;
use crate::services::auth::hash_password;
use crate::store::{ListingRepository, PurchaseRepository, Store, UserRepository};

/// Demo account password.
const DEMO_PASSWORD: &str = "password";

/// Ensure the administrator account exists.
///
/// Idempotent: if a user already holds the configured admin email, it is
/// returned as-is.
///
/// # Errors
///
/// Returns `AuthError` if password hashing or user creation fails.
pub fn bootstrap_admin(store: &Store, config: &ServerConfig) -> Result<User, AuthError> {
    let users = UserRepository::new(store);

    if let Some(existing) = users.get_by_email(&config.admin_email) {
        return Ok(existing);
    }

    let digest = hash_password(config.admin_password.expose_secret())?;
    let admin = users.create("Admin", config.admin_email.clone(), digest, Role::Admin)?;

    Ok(admin)
}

/// Seed demo users, listings, and one prior purchase.
///
/// Skipped if the catalog is already populated.
///
/// # Errors
///
/// Returns `AuthError` if password hashing or user creation fails.
pub fn seed_demo(store: &Store) -> Result<(), AuthError> {
    let users = UserRepository::new(store);
    let listings = ListingRepository::new(store);
    let purchases = PurchaseRepository::new(store);

    if !listings.browse(None, None).is_empty() {
        return Ok(());
    }

    let alice = users.create(
        "Alice",
        "alice@example.com".parse()?,
        hash_password(DEMO_PASSWORD)?,
        Role::Member,
    )?;
    let bob = users.create(
        "Bob",
        "bob@example.com".parse()?,
        hash_password(DEMO_PASSWORD)?,
        Role::Member,
    )?;

    let now = Utc::now();
    let demo_listing = |seller: UserId,
                        title: &str,
                        description: &str,
                        category: Category,
                        price: i64,
                        image_url: &str,
                        age_hours: i64| Listing {
        id: ListingId::generate(),
        seller_id: seller,
        title: title.to_owned(),
        description: description.to_owned(),
        category,
        price: Price::new(price).unwrap_or(Price::ZERO),
        image_url: image_url.to_owned(),
        created_at: now - Duration::hours(age_hours),
    };

    listings.insert(demo_listing(
        bob.id,
        "Vintage Book Collection",
        "A curated stack of classic and contemporary reads in good condition.",
        Category::Books,
        1500,
        "https://images.curio.test/books.webp",
        6,
    ));

    let coral_tee = demo_listing(
        alice.id,
        "Coral Tee - Limited Edition",
        "Soft cotton tee in coral color. Limited edition.",
        Category::Fashion,
        2500,
        "https://images.curio.test/coral-tee.webp",
        12,
    );
    listings.insert(coral_tee.clone());

    listings.insert(demo_listing(
        alice.id,
        "Vintage Leather Jacket",
        "Well-maintained leather jacket, size M. Classic style.",
        Category::Fashion,
        7500,
        "https://images.curio.test/jacket.webp",
        72,
    ));
    listings.insert(demo_listing(
        bob.id,
        "Used Acoustic Guitar",
        "6-string acoustic guitar with a warm tone. Minor scratches.",
        Category::Other,
        4500,
        "https://images.curio.test/guitar.webp",
        48,
    ));
    listings.insert(demo_listing(
        alice.id,
        "Kitchen Mixer",
        "Lightly used mixer in great condition.",
        Category::Electronics,
        3000,
        "",
        24,
    ));
    listings.insert(demo_listing(
        bob.id,
        "Handmade Pottery Set",
        "Assorted handmade pottery pieces, bowls and mugs.",
        Category::PotteryAndClay,
        4000,
        "https://images.curio.test/pottery.webp",
        48,
    ));

    // One prior purchase so the demo account has history
    purchases.append(
        alice.id,
        PurchaseRecord {
            id: PurchaseId::generate(),
            listing: coral_tee,
            purchased_at: now - Duration::hours(1),
        },
    );

    Ok(())
}
