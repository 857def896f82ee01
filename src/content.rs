//! Static copy for the landing page card grids.
//!
//! The grids render these arrays in order, one card per entry.

/// Title and description for one card.
pub struct CardCopy {
    pub title: &'static str,
    pub description: &'static str,
}

/// "Key Features" cards, in display order.
pub static KEY_FEATURES: [CardCopy; 4] = [
    CardCopy {
        title: "Automated Test Generation",
        description: "Instantly generate test cases by simply uploading an image of your form.",
    },
    CardCopy {
        title: "Seamless Integration",
        description: "Works effortlessly with testing tools like Selenium.",
    },
    CardCopy {
        title: "Supports Various Inputs",
        description: "Upload images, enter URLs for comprehensive testing.",
    },
    CardCopy {
        title: "Time & Cost Efficiency",
        description: "Reduce manual effort and increase productivity with AI-powered automation.",
    },
];

/// "How It Works" cards, in display order.
pub static HOW_IT_WORKS: [CardCopy; 4] = [
    CardCopy {
        title: "📷 Upload a Photo",
        description: "Choose an image of the form you want to generate test cases for.",
    },
    CardCopy {
        title: "🔗 Enter the URL",
        description: "Provide the URL of the form if available for better accuracy.",
    },
    CardCopy {
        title: "📌 Select Number of Test Cases",
        description: "Specify how many test cases you want to generate.",
    },
    CardCopy {
        title: "🚀 Run Test Cases",
        description: "Execute the test cases and get instant results.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_cards_fixed_order() {
        let titles: Vec<_> = KEY_FEATURES.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            [
                "Automated Test Generation",
                "Seamless Integration",
                "Supports Various Inputs",
                "Time & Cost Efficiency",
            ]
        );
    }

    #[test]
    fn test_how_it_works_cards_fixed_order() {
        let titles: Vec<_> = HOW_IT_WORKS.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            [
                "📷 Upload a Photo",
                "🔗 Enter the URL",
                "📌 Select Number of Test Cases",
                "🚀 Run Test Cases",
            ]
        );
    }

    #[test]
    fn test_every_card_has_copy() {
        for card in KEY_FEATURES.iter().chain(HOW_IT_WORKS.iter()) {
            assert!(!card.title.is_empty());
            assert!(!card.description.is_empty());
        }
    }
}
