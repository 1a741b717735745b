//! Framework recognition from dependency names.

/// Keyword → framework-name table, matched case-insensitively by substring
/// against dependency names.
pub const FRAMEWORK_KEYWORDS: &[(&str, &str)] = &[
    ("react", "React"),
    ("vue", "Vue"),
    ("angular", "Angular"),
    ("next", "Next.js"),
    ("nuxt", "Nuxt.js"),
    ("express", "Express"),
    ("fastify", "Fastify"),
    ("koa", "Koa"),
    ("django", "Django"),
    ("flask", "Flask"),
    ("spring", "Spring"),
    ("laravel", "Laravel"),
];

/// Framework names whose keyword occurs in the given dependency name.
pub fn frameworks_matching(dependency: &str) -> impl Iterator<Item = &'static str> + '_ {
    let lower = dependency.to_lowercase();
    FRAMEWORK_KEYWORDS
        .iter()
        .filter(move |(keyword, _)| lower.contains(keyword))
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_by_substring_case_insensitive() {
        let matches: Vec<_> = frameworks_matching("React-DOM").collect();
        assert_eq!(matches, vec!["React"]);
    }

    #[test]
    fn test_one_name_can_match_several_keywords() {
        let matches: Vec<_> = frameworks_matching("nextjs-vue-adapter").collect();
        assert_eq!(matches, vec!["Vue", "Next.js"]);
    }

    #[test]
    fn test_no_match_yields_nothing() {
        assert_eq!(frameworks_matching("lodash").count(), 0);
    }
}
