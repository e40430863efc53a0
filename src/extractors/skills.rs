// src/extractors/skills.rs
use std::collections::HashSet;

use crate::utils::text::title_case;

/// How a matched vocabulary term is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Canonical {
    /// `machine learning` -> `Machine Learning`
    Title,
    /// `aws` -> `AWS`
    Upper,
    /// Fixed spelling, e.g. `node` -> `Node.js`
    Exact(&'static str),
}

impl Canonical {
    pub fn display(self, term: &str) -> String {
        match self {
            Canonical::Title => title_case(term),
            Canonical::Upper => term.to_uppercase(),
            Canonical::Exact(s) => s.to_string(),
        }
    }
}

use Canonical::{Exact, Title, Upper};

/// Curated vocabulary, lower-case term -> display rule. Order is reporting
/// order. Several terms may share one display form; it is reported once.
pub static SKILL_VOCABULARY: &[(&str, Canonical)] = &[
    // languages
    ("python", Title),
    ("java", Title),
    ("javascript", Exact("JavaScript")),
    ("typescript", Exact("TypeScript")),
    ("c++", Exact("C++")),
    ("c#", Exact("C#")),
    ("golang", Exact("Go")),
    ("rust", Title),
    ("ruby", Title),
    ("php", Upper),
    ("swift", Title),
    ("kotlin", Title),
    ("scala", Title),
    ("perl", Title),
    ("matlab", Upper),
    ("sql", Upper),
    ("html", Upper),
    ("css", Upper),
    ("bash", Title),
    ("powershell", Exact("PowerShell")),
    // frameworks and libraries
    ("react", Title),
    ("react native", Title),
    ("angular", Title),
    ("vue", Title),
    ("next.js", Exact("Next.js")),
    ("node.js", Exact("Node.js")),
    ("node", Exact("Node.js")),
    ("express", Title),
    ("django", Title),
    ("flask", Title),
    ("fastapi", Exact("FastAPI")),
    ("spring boot", Title),
    ("spring", Title),
    (".net", Exact(".NET")),
    ("asp.net", Exact("ASP.NET")),
    ("ruby on rails", Exact("Ruby on Rails")),
    ("laravel", Title),
    ("jquery", Exact("jQuery")),
    ("bootstrap", Title),
    ("tailwind", Exact("Tailwind CSS")),
    ("graphql", Exact("GraphQL")),
    ("rest api", Exact("REST API")),
    // databases
    ("mysql", Exact("MySQL")),
    ("postgresql", Exact("PostgreSQL")),
    ("postgres", Exact("PostgreSQL")),
    ("mongodb", Exact("MongoDB")),
    ("redis", Title),
    ("sqlite", Exact("SQLite")),
    ("oracle", Title),
    ("elasticsearch", Title),
    ("dynamodb", Exact("DynamoDB")),
    ("cassandra", Title),
    ("firebase", Title),
    // cloud and devops
    ("aws", Upper),
    ("azure", Title),
    ("gcp", Upper),
    ("google cloud", Title),
    ("docker", Title),
    ("kubernetes", Title),
    ("terraform", Title),
    ("ansible", Title),
    ("jenkins", Title),
    ("ci/cd", Upper),
    ("git", Title),
    ("github", Exact("GitHub")),
    ("gitlab", Exact("GitLab")),
    ("linux", Title),
    ("nginx", Title),
    ("microservices", Title),
    ("devops", Exact("DevOps")),
    // data and machine learning
    ("machine learning", Title),
    ("deep learning", Title),
    ("data analysis", Title),
    ("data science", Title),
    ("nlp", Upper),
    ("computer vision", Title),
    ("tensorflow", Exact("TensorFlow")),
    ("pytorch", Exact("PyTorch")),
    ("scikit-learn", Exact("scikit-learn")),
    ("pandas", Title),
    ("numpy", Exact("NumPy")),
    ("spark", Exact("Apache Spark")),
    ("hadoop", Title),
    ("tableau", Title),
    ("power bi", Exact("Power BI")),
    ("excel", Title),
    ("statistics", Title),
    // process
    ("agile", Title),
    ("scrum", Title),
    ("kanban", Title),
    ("tdd", Upper),
    ("project management", Title),
    // soft skills
    ("leadership", Title),
    ("communication", Title),
    ("teamwork", Title),
    ("problem solving", Title),
    ("time management", Title),
    ("mentoring", Title),
    // tools
    ("jira", Title),
    ("confluence", Title),
    ("figma", Title),
    ("postman", Title),
    ("selenium", Title),
    ("webpack", Title),
    ("unit testing", Title),
];

/// Skills mentioned anywhere in the text, canonicalized and de-duplicated in
/// vocabulary order. Matching is case-insensitive; a term embedded in a
/// longer word (`java` in `javascript`) does not count.
pub fn extract_skills(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for (term, canonical) in SKILL_VOCABULARY {
        if !contains_term(&lowered, term) {
            continue;
        }
        let display = canonical.display(term);
        if seen.insert(display.clone()) {
            found.push(display);
        }
    }

    tracing::debug!("Matched {} skills", found.len());
    found
}

/// Substring search where neither neighbour of the match is alphanumeric.
fn contains_term(haystack: &str, term: &str) -> bool {
    haystack.match_indices(term).any(|(start, m)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + m.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_variants_reported_once() {
        let text = "python scripting, Python services, PYTHON tooling, python again";
        assert_eq!(extract_skills(text), vec!["Python"]);
    }

    #[test]
    fn test_canonical_forms() {
        let skills = extract_skills("Built APIs with node and Postgres on aws; ci/cd with GitHub Actions; machine learning");
        assert_eq!(skills, vec!["Node.js", "PostgreSQL", "AWS", "CI/CD", "GitHub", "Machine Learning"]);
    }

    #[test]
    fn test_embedded_terms_do_not_match() {
        let skills = extract_skills("JavaScript developer with excellent sparkling ideas");
        assert_eq!(skills, vec!["JavaScript"]);
    }

    #[test]
    fn test_symbol_terms() {
        let skills = extract_skills("C++, C# and .NET; some react native");
        assert_eq!(skills, vec!["C++", "C#", "React", "React Native", ".NET"]);
    }

    #[test]
    fn test_vocabulary_terms_are_lowercase_and_unique() {
        let mut terms = HashSet::new();
        for (term, _) in SKILL_VOCABULARY {
            assert_eq!(*term, term.to_lowercase());
            assert!(terms.insert(*term), "duplicate term {}", term);
        }
        assert!(SKILL_VOCABULARY.len() >= 90);
    }
}
