//! Built-in sample dataset used by the default driver run.

use crate::models::{ResponseItem, Source};

/// Returns the literal sample: one restaurant FAQ response with three sources.
///
/// Expected citations are ids 71 and 8; id 75 matches but has no link.
pub fn sample_dataset() -> Vec<ResponseItem> {
    vec![ResponseItem::new(
        "Yes, we offer online delivery services through major platforms like Swiggy and Zomato. You can also reserve a table directly from our website if you are planning to have breakfast!",
        vec![
            Source::new(
                "71",
                "Order online Thank you for your trust in us! We are available on all major platforms like zomato, swiggy. You can also order directly from our website",
                "https://orders.brikoven.com",
            ),
            Source::new(
                "75",
                "Do you give franchise if the brand No, we currently don't offer franchise opportunities for BrikOven! Although do feel free to drop in an email at theteam@brikoven.com so we can get in touch with you at a later stage if we do decide to give out franchisees",
                "",
            ),
            Source::new(
                "8",
                "Breakfast Reservations For Breakfast, we recommend making reservations in advance. Reservation is only available through our website",
                "https://www.brikoven.com/reservations",
            ),
        ],
    )]
}
