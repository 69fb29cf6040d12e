//! Built-in seed data used when a configuration section is absent.

use std::collections::BTreeMap;

use super::{
    AccountConfig, CatalogItemConfig, CategoryProfileConfig, CouponConfig, OnboardingConfig,
};
use crate::catalog::ItemKind;
use crate::onboarding::OnboardingPage;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub(crate) fn categories() -> BTreeMap<String, CategoryProfileConfig> {
    [
        ("child", 50, ["Free meals", "Priority seating"]),
        ("student", 30, ["Educational tours", "Group discounts"]),
        ("adult", 0, ["Standard booking", "Loyalty points"]),
        ("senior", 40, ["Priority boarding", "Medical assistance"]),
    ]
    .into_iter()
    .map(|(name, discount, benefits)| {
        (
            name.to_string(),
            CategoryProfileConfig {
                discount,
                benefits: strings(&benefits),
            },
        )
    })
    .collect()
}

pub(crate) fn catalog() -> Vec<CatalogItemConfig> {
    vec![
        CatalogItemConfig {
            id: 1,
            kind: ItemKind::Lodging,
            name: "ITDC Hotel Ashok".to_string(),
            location: Some("Chankyapuri".to_string()),
            route: None,
            price: "₹2,500/night".to_string(),
            rating: Some(4.2),
            amenities: strings(&["WiFi", "Restaurant", "Parking"]),
            departure: None,
            category: "Premium".to_string(),
        },
        CatalogItemConfig {
            id: 3,
            kind: ItemKind::Transit,
            name: "DTC Volvo Service".to_string(),
            location: None,
            route: Some("Delhi - Agra".to_string()),
            price: "₹450".to_string(),
            rating: None,
            amenities: Vec::new(),
            departure: Some("06:30 AM".to_string()),
            category: "Express".to_string(),
        },
    ]
}

pub(crate) fn coupons() -> Vec<CouponConfig> {
    [
        (1, "30% Off Metro Pass", 250, "Dec 31", 50, false),
        (2, "Free Bus Day Pass", 180, "Dec 28", 30, false),
        (3, "Bike Rental Discount", 320, "Jan 5", 70, true),
        (4, "Walking Tour Voucher", 400, "Jan 10", 100, false),
    ]
    .into_iter()
    .map(|(id, title, calories, expires, points, claimed)| CouponConfig {
        id,
        title: title.to_string(),
        calories,
        expires: expires.to_string(),
        points,
        claimed,
    })
    .collect()
}

pub(crate) fn account() -> AccountConfig {
    AccountConfig {
        points: 180,
        calories: 1250,
        claimed: vec![3],
    }
}

pub(crate) fn onboarding() -> OnboardingConfig {
    let pages = [
        (
            1,
            "location",
            "Track Your Journeys",
            "Automatically detect and record your daily trips across Kerala to help improve transportation planning.",
            "Continue",
        ),
        (
            2,
            "shield-checkmark",
            "Your Privacy Matters",
            "All data is anonymized and secure. We never store personal information or share individual travel patterns.",
            "Continue",
        ),
        (
            3,
            "stats-chart",
            "Building Better Transport",
            "Your contributions help create data-driven insights for smarter public transportation and infrastructure planning.",
            "Get Started",
        ),
    ]
    .into_iter()
    .map(|(id, icon, title, description, button_label)| OnboardingPage {
        id,
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        button_label: button_label.to_string(),
    })
    .collect();

    OnboardingConfig {
        consent_prompt: "I agree to share anonymized travel data to help improve Kerala's transportation system".to_string(),
        pages,
    }
}
