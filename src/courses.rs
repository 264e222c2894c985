//! Fixed course catalog used to render predictions.

/// Label shown when a class index has no course attached.
pub const UNKNOWN_COURSE: &str = "Unknown";

/// Number of courses in the catalog.
pub const COURSE_COUNT: usize = 35;

/// Course names indexed by the class ids of the historical training data.
pub const COURSE_NAMES: [&str; COURSE_COUNT] = [
    "Animation, Graphics and Multimedia",
    "B.Arch- Bachelor of Architecture",
    "B.Com- Bachelor of Commerce",
    "B.Ed.",
    "B.Sc- Applied Geology",
    "B.Sc- Nursing",
    "B.Sc. Chemistry",
    "B.Sc. Mathematics",
    "B.Sc.- Information Technology",
    "B.Sc.- Physics",
    "B.Tech.-Civil Engineering",
    "B.Tech.-Computer Science and Engineering",
    "B.Tech.-Electrical and Electronics Engineering",
    "B.Tech.-Electronics and Communication Engineering",
    "B.Tech.-Mechanical Engineering",
    "BA in Economics",
    "BA in English",
    "BA in Hindi",
    "BA in History",
    "BBA- Bachelor of Business Administration",
    "BBS- Bachelor of Business Studies",
    "BCA- Bachelor of Computer Applications",
    "BDS- Bachelor of Dental Surgery",
    "BEM- Bachelor of Event Management",
    "BFD- Bachelor of Fashion Designing",
    "BJMC- Bachelor of Journalism and Mass Communication",
    "BPharma- Bachelor of Pharmacy",
    "BTTM- Bachelor of Travel and Tourism Management",
    "BVA- Bachelor of Visual Arts",
    "CA- Chartered Accountancy",
    "CS- Company Secretary",
    "Civil Services",
    "Diploma in Dramatic Arts",
    "Integrated Law Course- BA + LL.B",
    "MBBS",
];

/// Resolve a class index through the catalog, falling back to [`UNKNOWN_COURSE`].
pub fn course_name(index: usize) -> &'static str {
    COURSE_NAMES.get(index).copied().unwrap_or(UNKNOWN_COURSE)
}

/// A class index whose fitted label differs from the catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogDrift {
    pub index: usize,
    /// Label the training data assigned to this index.
    pub fitted: String,
    /// Catalog entry at the same index (`"Unknown"` past the end).
    pub catalog: &'static str,
}

/// Compare a fitted label mapping against the catalog, index by index.
///
/// An empty result means class ids produced by the mapping render identically
/// through either the mapping or the catalog.
pub fn catalog_drift(classes: &[String]) -> Vec<CatalogDrift> {
    classes
        .iter()
        .enumerate()
        .filter(|(index, fitted)| course_name(*index) != fitted.as_str())
        .map(|(index, fitted)| CatalogDrift {
            index,
            fitted: fitted.clone(),
            catalog: course_name(index),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_indices_resolve_to_documented_names() {
        assert_eq!(course_name(0), "Animation, Graphics and Multimedia");
        assert_eq!(course_name(11), "B.Tech.-Computer Science and Engineering");
        assert_eq!(course_name(29), "CA- Chartered Accountancy");
        assert_eq!(course_name(34), "MBBS");
    }

    #[test]
    fn out_of_range_indices_are_unknown() {
        assert_eq!(course_name(35), UNKNOWN_COURSE);
        assert_eq!(course_name(99), "Unknown");
        assert_eq!(course_name(usize::MAX), UNKNOWN_COURSE);
    }

    #[test]
    fn catalog_is_sorted_like_a_fitted_label_encoder() {
        let mut sorted = COURSE_NAMES.to_vec();
        sorted.sort();
        assert_eq!(sorted, COURSE_NAMES.to_vec());
    }

    #[test]
    fn drift_reports_mismatched_indices() {
        let aligned: Vec<String> = COURSE_NAMES.iter().map(|s| s.to_string()).collect();
        assert!(catalog_drift(&aligned).is_empty());

        let shifted = vec![
            "B.Arch- Bachelor of Architecture".to_string(),
            "MBBS".to_string(),
        ];
        let drift = catalog_drift(&shifted);
        assert_eq!(drift.len(), 2);
        assert_eq!(drift[0].index, 0);
        assert_eq!(drift[0].catalog, "Animation, Graphics and Multimedia");
        assert_eq!(drift[1].fitted, "MBBS");
    }
}
