use crate::models::QualityLabel;

/// Lower bounds of the top four tiers; anything below the last is the fifth
const TIER_FLOORS: [u8; 4] = [85, 70, 55, 40];

static COMPATIBILITY_TIERS: [QualityLabel; 5] = [
    QualityLabel {
        label: "Excellent Match",
        color: "green",
        description: "You two would be amazing roommates!",
        emoji: Some("🌟"),
    },
    QualityLabel {
        label: "Great Match",
        color: "blue",
        description: "Strong compatibility - worth connecting!",
        emoji: Some("✨"),
    },
    QualityLabel {
        label: "Good Match",
        color: "yellow",
        description: "Good potential - have a chat to explore more",
        emoji: Some("👍"),
    },
    QualityLabel {
        label: "Fair Match",
        color: "orange",
        description: "Some compatibility - review considerations carefully",
        emoji: Some("🤔"),
    },
    QualityLabel {
        label: "Low Match",
        color: "red",
        description: "Limited compatibility - may face challenges",
        emoji: Some("⚠️"),
    },
];

static PROPERTY_TIERS: [QualityLabel; 5] = [
    QualityLabel {
        label: "Perfect Match",
        color: "green",
        description: "This property is ideal for you!",
        emoji: Some("🏡"),
    },
    QualityLabel {
        label: "Excellent Match",
        color: "blue",
        description: "Highly recommended - check it out!",
        emoji: Some("⭐"),
    },
    QualityLabel {
        label: "Good Match",
        color: "yellow",
        description: "Worth considering - review the details",
        emoji: Some("👍"),
    },
    QualityLabel {
        label: "Fair Match",
        color: "orange",
        description: "Some compatibility - review considerations",
        emoji: Some("🤔"),
    },
    QualityLabel {
        label: "Low Match",
        color: "red",
        description: "May not be the best fit for you",
        emoji: Some("⚠️"),
    },
];

static LISTING_TIERS: [QualityLabel; 5] = [
    QualityLabel {
        label: "Excellent Match",
        color: "green",
        description: "Checks nearly every box on your list",
        emoji: None,
    },
    QualityLabel {
        label: "Great Match",
        color: "blue",
        description: "Fits most of your preferences",
        emoji: None,
    },
    QualityLabel {
        label: "Good Match",
        color: "yellow",
        description: "A solid option with a few trade-offs",
        emoji: None,
    },
    QualityLabel {
        label: "Fair Match",
        color: "orange",
        description: "Several preferences are not met",
        emoji: None,
    },
    QualityLabel {
        label: "Poor Match",
        color: "red",
        description: "Does not match what you are looking for",
        emoji: None,
    },
];

#[inline]
fn tier(score: u8) -> usize {
    TIER_FLOORS
        .iter()
        .position(|floor| score >= *floor)
        .unwrap_or(TIER_FLOORS.len())
}

/// Display tier for a user-to-user compatibility score
pub fn get_compatibility_quality(score: u8) -> QualityLabel {
    COMPATIBILITY_TIERS[tier(score)]
}

/// Display tier for a property-to-searcher score
pub fn get_property_match_quality(score: u8) -> QualityLabel {
    PROPERTY_TIERS[tier(score)]
}

/// Display tier for a browsing listing score
pub fn get_match_quality(score: u8) -> QualityLabel {
    LISTING_TIERS[tier(score)]
}
