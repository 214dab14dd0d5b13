//! Edits to a declared skill set. Skills are trimmed on entry and kept unique
//! by exact string; insertion order is preserved.

/// The trimmed skill name, or `None` when blank.
pub fn clean_skill(raw: &str) -> Option<&str> {
    Some(raw.trim()).filter(|s| !s.is_empty())
}

/// Adds `skill` if it is non-blank and not already present. Returns whether it was added.
pub fn add_skill(skills: &mut Vec<String>, skill: &str) -> bool {
    let Some(skill) = clean_skill(skill) else {
        return false;
    };
    if skills.iter().any(|s| s == skill) {
        return false;
    }
    skills.push(skill.to_string());
    true
}

/// Normalizes a whole replacement list: trimmed, blanks dropped, first occurrence wins.
pub fn normalize_skills<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut skills = Vec::new();
    for skill in raw {
        add_skill(&mut skills, skill.as_ref());
    }
    skills
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_appends() {
        let mut skills = vec!["React".to_string()];
        assert!(add_skill(&mut skills, "  TypeScript "));
        assert_eq!(skills, vec!["React", "TypeScript"]);
    }

    #[test]
    fn test_add_ignores_blank_and_duplicates() {
        let mut skills = vec!["React".to_string()];
        assert!(!add_skill(&mut skills, "   "));
        assert!(!add_skill(&mut skills, " React"));
        assert_eq!(skills, vec!["React"]);
    }

    #[test]
    fn test_add_is_case_sensitive() {
        let mut skills = vec!["React".to_string()];
        assert!(add_skill(&mut skills, "react"));
        assert_eq!(skills.len(), 2);
    }

    #[test]
    fn test_clean_skill() {
        assert_eq!(clean_skill("  Rust "), Some("Rust"));
        assert_eq!(clean_skill(" \t "), None);
    }

    #[test]
    fn test_normalize_keeps_first_occurrence() {
        let skills = normalize_skills(["Go", " Rust", "", "Go ", "SQL"]);
        assert_eq!(skills, vec!["Go", "Rust", "SQL"]);
    }
}
