use crate::models::{
    CategoryCompletion, ExtendedProfileData, PersonalProfileCompletion, ProfileCategory,
    ProfileCompleteness, UserProfile,
};

/// Matching profiles at or above this percentage produce reliable scores
pub const COMPLETE_PERCENTAGE: u8 = 40;

/// Personal profiles at or above this percentage unlock matching
pub const UNLOCK_PERCENTAGE: u8 = 70;

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

fn has_items(value: &Option<Vec<String>>) -> bool {
    value.as_ref().is_some_and(|v| !v.is_empty())
}

fn percentage(filled: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((filled as f64 / total as f64) * 100.0).round() as u8
}

/// The 20-field matching checklist: every field the compatibility engine reads
fn matching_checklist(user: &UserProfile) -> [(ProfileCategory, Vec<bool>); 5] {
    [
        (
            ProfileCategory::Lifestyle,
            vec![
                user.cleanliness_level.is_some(),
                user.wake_up_time.is_some(),
                user.sleep_time.is_some(),
                user.house_rules_preference.is_some(),
                user.cooking_frequency.is_some(),
            ],
        ),
        (
            ProfileCategory::Social,
            vec![
                user.social_energy.is_some(),
                user.openness_to_sharing.is_some(),
                user.cultural_openness.is_some(),
                user.event_participation_interest.is_some(),
                user.guest_frequency.is_some(),
            ],
        ),
        (
            ProfileCategory::Practical,
            vec![
                user.min_budget.is_some(),
                user.max_budget.is_some(),
                user.date_of_birth.is_some(),
                user.preferred_coliving_size.is_some(),
                user.gender_preference.is_some(),
            ],
        ),
        (ProfileCategory::Values, vec![has_items(&user.core_values)]),
        (
            ProfileCategory::Preferences,
            vec![
                user.smoking.is_some(),
                user.pets.is_some(),
                user.smoking_tolerance.is_some(),
                user.pets_tolerance.is_some(),
            ],
        ),
    ]
}

/// Calculate how much of the matching checklist a profile fills
///
/// A category counts as missing when fewer than half of its fields are
/// filled. The profile is complete at 40% or more.
pub fn calculate_profile_completeness(user: &UserProfile) -> ProfileCompleteness {
    let mut filled_fields = 0;
    let mut total_fields = 0;
    let mut missing_categories = Vec::new();

    for (category, fields) in matching_checklist(user) {
        let category_filled = fields.iter().filter(|f| **f).count();
        filled_fields += category_filled;
        total_fields += fields.len();

        if category_filled * 2 < fields.len() {
            missing_categories.push(category);
        }
    }

    let percentage = percentage(filled_fields, total_fields);

    ProfileCompleteness {
        percentage,
        filled_fields,
        total_fields,
        is_complete: percentage >= COMPLETE_PERCENTAGE,
        missing_categories,
    }
}

struct PersonalCategory {
    key: &'static str,
    label: &'static str,
    fields: Vec<(&'static str, bool)>,
    required: &'static [&'static str],
}

fn personal_checklist(user: &UserProfile, extended: &ExtendedProfileData) -> Vec<PersonalCategory> {
    vec![
        PersonalCategory {
            key: "identity",
            label: "Identity",
            fields: vec![
                ("first_name", !user.first_name.is_empty()),
                ("last_name", !user.last_name.is_empty()),
                ("date_of_birth", user.date_of_birth.is_some()),
                ("gender", has_text(&user.gender)),
                (
                    "profile_photo_url",
                    has_text(&user.profile_photo_url) || has_text(&extended.profile_photo_url),
                ),
            ],
            required: &["first_name", "last_name", "date_of_birth"],
        },
        PersonalCategory {
            key: "contact",
            label: "Contact",
            fields: vec![
                ("email", has_text(&extended.email)),
                ("phone_number", has_text(&extended.phone_number)),
            ],
            required: &["email"],
        },
        PersonalCategory {
            key: "verification",
            label: "Verification",
            fields: vec![("kyc_verified", extended.kyc_verified.is_some())],
            required: &[],
        },
        PersonalCategory {
            key: "professional",
            label: "Situation",
            fields: vec![
                ("occupation_status", has_text(&user.occupation_status)),
                ("nationality", has_text(&user.nationality)),
                ("languages_spoken", has_items(&user.languages_spoken)),
            ],
            required: &["occupation_status"],
        },
        PersonalCategory {
            key: "presentation",
            label: "Presentation",
            fields: vec![
                ("bio", has_text(&user.bio)),
                ("hobbies", has_items(&user.hobbies)),
                ("interests", has_items(&user.interests)),
            ],
            required: &["bio"],
        },
        PersonalCategory {
            key: "lifestyle",
            label: "Lifestyle",
            fields: vec![
                ("cleanliness_level", user.cleanliness_level.is_some()),
                ("wake_up_time", user.wake_up_time.is_some()),
                ("sleep_time", user.sleep_time.is_some()),
                ("social_energy", user.social_energy.is_some()),
                ("smoking", user.smoking.is_some()),
                ("pets", user.pets.is_some()),
            ],
            required: &["cleanliness_level", "social_energy"],
        },
        PersonalCategory {
            key: "preferences",
            label: "Coliving preferences",
            fields: vec![
                ("min_budget", user.min_budget.is_some()),
                ("max_budget", user.max_budget.is_some()),
                ("preferred_coliving_size", user.preferred_coliving_size.is_some()),
                ("gender_preference", user.gender_preference.is_some()),
            ],
            required: &["min_budget", "max_budget"],
        },
        PersonalCategory {
            key: "banking",
            label: "Banking",
            fields: vec![("iban", has_text(&extended.iban))],
            required: &[],
        },
    ]
}

/// Calculate completion of the whole personal profile
///
/// This covers account data (contact, KYC, banking) that never affects a
/// score but gates access to matching at 70%.
pub fn calculate_personal_profile_completion(
    user: &UserProfile,
    extended: &ExtendedProfileData,
) -> PersonalProfileCompletion {
    let mut filled_fields = 0;
    let mut total_fields = 0;
    let mut categories = Vec::new();
    let mut required_for_unlock = Vec::new();

    for category in personal_checklist(user, extended) {
        let mut category_filled = 0;

        for (key, is_filled) in &category.fields {
            total_fields += 1;
            if *is_filled {
                filled_fields += 1;
                category_filled += 1;
            } else if category.required.contains(key) {
                required_for_unlock.push(format!("{}: {}", category.label, key));
            }
        }

        let total = category.fields.len();
        categories.push(CategoryCompletion {
            category: category.key.to_string(),
            label: category.label.to_string(),
            filled: category_filled,
            total,
            is_complete: category_filled >= total.div_ceil(2),
        });
    }

    let percentage = percentage(filled_fields, total_fields);

    PersonalProfileCompletion {
        percentage,
        filled_fields,
        total_fields,
        is_unlocked: percentage >= UNLOCK_PERCENTAGE,
        categories,
        required_for_unlock,
    }
}
