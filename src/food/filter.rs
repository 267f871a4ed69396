//! Local search over the catalog.
//!
//! Filtering never reorders: results keep catalog order, and an empty result
//! is a normal outcome.

use serde::Deserialize;
use std::str::FromStr;

use crate::food::catalog::{ImpactDomain, SynergyRecord, SynergyType};

pub const ALL: &str = "All";

/// Goal chip selection. `Tag` matches a record's tags exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GoalFilter {
    #[default]
    All,
    Tag(String),
}

impl GoalFilter {
    pub fn parse(goal: Option<&str>) -> Self {
        match goal {
            None | Some(ALL) => GoalFilter::All,
            Some(tag) if tag.is_empty() => GoalFilter::All,
            Some(tag) => GoalFilter::Tag(tag.to_string()),
        }
    }

    pub fn matches(&self, record: &SynergyRecord) -> bool {
        match self {
            GoalFilter::All => true,
            GoalFilter::Tag(tag) => record.has_tag(tag),
        }
    }
}

/// Database view selection: by impact domain or by synergy type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Domain(ImpactDomain),
    Type(SynergyType),
}

/// The choices offered by the database view, in display order.
pub const DATABASE_FILTERS: &[CategoryFilter] = &[
    CategoryFilter::All,
    CategoryFilter::Domain(ImpactDomain::Cognitive),
    CategoryFilter::Domain(ImpactDomain::Physical),
    CategoryFilter::Type(SynergyType::Kinetic),
    CategoryFilter::Type(SynergyType::Dynamic),
];

impl CategoryFilter {
    pub fn matches(&self, record: &SynergyRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Domain(domain) => record.domain == *domain,
            CategoryFilter::Type(synergy_type) => record.synergy_type == *synergy_type,
        }
    }

    pub fn label(&self) -> String {
        match self {
            CategoryFilter::All => "ALL".to_string(),
            CategoryFilter::Domain(domain) => domain.to_string().to_uppercase(),
            CategoryFilter::Type(synergy_type) => synergy_type.label().to_string(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | ALL => Ok(CategoryFilter::All),
            "Cognitive" => Ok(CategoryFilter::Domain(ImpactDomain::Cognitive)),
            "Physical" => Ok(CategoryFilter::Domain(ImpactDomain::Physical)),
            "Metabolic" => Ok(CategoryFilter::Domain(ImpactDomain::Metabolic)),
            "Immune" => Ok(CategoryFilter::Domain(ImpactDomain::Immune)),
            "Kinetic" => Ok(CategoryFilter::Type(SynergyType::Kinetic)),
            "Dynamic" => Ok(CategoryFilter::Type(SynergyType::Dynamic)),
            other => Err(format!("Unknown category filter '{}'", other)),
        }
    }
}

/// Which fields the free-text query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchView {
    /// name, ingredients, description
    #[default]
    Dashboard,
    /// name, ingredients, tags
    Database,
}

#[derive(Debug, Clone, Default)]
pub struct SearchParams<'q> {
    pub goal: GoalFilter,
    pub category: CategoryFilter,
    pub query: Option<&'q str>,
    pub view: SearchView,
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Case-insensitive OR match of `query` across the view's fields.
///
/// A missing, empty or whitespace-only query matches every record.
pub fn matches_query(record: &SynergyRecord, query: Option<&str>, view: SearchView) -> bool {
    let needle = match query {
        Some(q) if !q.trim().is_empty() => q.to_lowercase(),
        _ => return true,
    };

    if contains_ci(&record.name, &needle)
        || record.ingredients.iter().any(|i| contains_ci(i, &needle))
    {
        return true;
    }

    match view {
        SearchView::Dashboard => contains_ci(&record.description, &needle),
        SearchView::Database => record.tags.iter().any(|t| contains_ci(t, &needle)),
    }
}

pub fn search<'a>(records: &'a [SynergyRecord], params: &SearchParams<'_>) -> Vec<&'a SynergyRecord> {
    records
        .iter()
        .filter(|r| params.goal.matches(r) && params.category.matches(r))
        .filter(|r| matches_query(r, params.query, params.view))
        .collect()
}

/// Goal chips plus search box.
pub fn filter_dashboard<'a>(
    records: &'a [SynergyRecord],
    goal: &GoalFilter,
    query: Option<&str>,
) -> Vec<&'a SynergyRecord> {
    search(
        records,
        &SearchParams {
            goal: goal.clone(),
            query,
            view: SearchView::Dashboard,
            ..Default::default()
        },
    )
}

/// Category buttons plus search box.
pub fn filter_database<'a>(
    records: &'a [SynergyRecord],
    category: CategoryFilter,
    query: Option<&str>,
) -> Vec<&'a SynergyRecord> {
    search(
        records,
        &SearchParams {
            category,
            query,
            view: SearchView::Database,
            ..Default::default()
        },
    )
}
