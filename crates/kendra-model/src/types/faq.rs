use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::codec::EpochTime;
use crate::enums::{FaqStatus, Reported};

/// An FAQ as listed by `ListFaqs`.
#[derive(Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(
    pattern = "owned",
    default,
    setter(into, strip_option, prefix = "with"),
    build_fn(error = "crate::Error")
)]
pub struct FaqSummary {
    /// Identifier of the FAQ.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Name of the FAQ.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Reported<FaqStatus>>,

    /// When the FAQ was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<EpochTime>,

    /// When the FAQ was last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<EpochTime>,
}

super::impl_shape! {
    FaqSummary => FaqSummaryBuilder,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_summary_omits_unset_timestamps() {
        let summary = FaqSummary::builder()
            .with_id("faq-1")
            .with_name("benefits")
            .with_status(FaqStatus::Active)
            .build()
            .unwrap();

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value, json!({"Id": "faq-1", "Name": "benefits", "Status": "ACTIVE"}));
        assert_eq!(serde_json::from_value::<FaqSummary>(value).unwrap(), summary);
    }
}
