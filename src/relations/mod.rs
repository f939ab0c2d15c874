//! Derived cross-document relationships
//!
//! Two relations are computed without author input: a pseudo-shuffled
//! "related content" list for blog-like types, and circular next/previous
//! navigation for case studies.

use crate::content::ContentItem;

/// Most related documents shown on a page
pub const RELATED_LIMIT: usize = 3;

/// Seed of the related-content shuffle: the sum of the slug's UTF-16 code
/// units
pub fn slug_seed(slug: &str) -> u32 {
    slug.encode_utf16()
        .fold(0u32, |acc, unit| acc.wrapping_add(u32::from(unit)))
}

/// Rank of a candidate under `seed`: its first code unit XOR the seed.
///
/// This ordering is arbitrary on purpose. It spreads readers across the
/// catalogue and is stable per slug; it says nothing about topical
/// similarity. An empty slug ranks as if its first code unit were zero.
pub fn shuffle_rank(seed: u32, candidate: &str) -> u32 {
    let first = candidate.encode_utf16().next().map(u32::from).unwrap_or(0);
    first ^ seed
}

/// Pick up to `limit` slugs other than `current`, lowest rank first.
///
/// Equal ranks keep their input order.
pub fn related_slugs<'a, I>(current: &str, candidates: I, limit: usize) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let seed = slug_seed(current);
    let mut ranked: Vec<(u32, &'a str)> = candidates
        .into_iter()
        .filter(|slug| *slug != current)
        .map(|slug| (shuffle_rank(seed, slug), slug))
        .collect();
    ranked.sort_by_key(|(rank, _)| *rank);
    ranked.into_iter().take(limit).map(|(_, slug)| slug).collect()
}

/// Related documents for `current`.
///
/// Slugs the author listed under `related` come first, in the order given;
/// ones that name no document in `candidates` are logged and skipped. The
/// shuffle fills whatever room is left.
pub fn related<'a>(current: &ContentItem, candidates: &[&'a ContentItem]) -> Vec<&'a ContentItem> {
    let mut picked: Vec<&'a ContentItem> = Vec::with_capacity(RELATED_LIMIT);

    for wanted in &current.frontmatter.related {
        if picked.len() == RELATED_LIMIT {
            break;
        }
        if *wanted == current.slug || picked.iter().any(|p| p.slug == *wanted) {
            continue;
        }
        match candidates.iter().find(|c| c.slug == *wanted) {
            Some(found) => picked.push(*found),
            None => tracing::warn!(
                "{}/{} lists unknown related slug `{}`",
                current.content_type,
                current.slug,
                wanted
            ),
        }
    }

    let remaining = RELATED_LIMIT - picked.len();
    if remaining > 0 {
        let pool = candidates
            .iter()
            .map(|c| c.slug.as_str())
            .filter(|slug| !picked.iter().any(|p| p.slug == *slug));
        for slug in related_slugs(&current.slug, pool, remaining) {
            if let Some(found) = candidates.iter().find(|c| c.slug == slug) {
                picked.push(*found);
            }
        }
    }

    picked
}

/// Index after `current` in a circular list of `count` entries.
///
/// An empty list is a data-integrity violation; it is logged and index 0 is
/// returned.
pub fn next_index(current: usize, count: usize) -> usize {
    if count == 0 {
        tracing::error!("circular navigation over an empty list");
        return 0;
    }
    (current + 1) % count
}

/// Index before `current` in a circular list of `count` entries
pub fn previous_index(current: usize, count: usize) -> usize {
    if count == 0 {
        tracing::error!("circular navigation over an empty list");
        return 0;
    }
    (current % count + count - 1) % count
}

/// Slug following `current` in `slugs`, wrapping from the last to the first
pub fn next_slug<'a>(slugs: &[&'a str], current: &str) -> Option<&'a str> {
    let index = slugs.iter().position(|s| *s == current)?;
    slugs.get(next_index(index, slugs.len())).copied()
}

/// Slug preceding `current` in `slugs`, wrapping from the first to the last
pub fn previous_slug<'a>(slugs: &[&'a str], current: &str) -> Option<&'a str> {
    let index = slugs.iter().position(|s| *s == current)?;
    slugs.get(previous_index(index, slugs.len())).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentType;
    use crate::test_support::TestContent;

    #[test]
    fn test_slug_seed() {
        assert_eq!(slug_seed(""), 0);
        assert_eq!(slug_seed("ab"), 97 + 98);
    }

    #[test]
    fn test_related_slugs_exact_order() {
        // seed("b") = 98; ranks: a=97^98=3, c=99^98=1, d=100^98=6, e=101^98=7
        let slugs = ["a", "b", "c", "d", "e"];
        assert_eq!(related_slugs("b", slugs, 3), vec!["c", "a", "d"]);
    }

    #[test]
    fn test_related_slugs_ties_keep_input_order() {
        // seed("zzz") = 366; `b` ranks 268, every `a...` slug ranks 271
        let slugs = ["apple", "avocado", "banana", "apricot"];
        assert_eq!(
            related_slugs("zzz", slugs, 3),
            vec!["banana", "apple", "avocado"]
        );
    }

    #[test]
    fn test_related_slugs_is_deterministic_and_excludes_self() {
        let slugs = ["pricing-guide", "launch", "roadmap", "hiring", "security"];
        let first = related_slugs("launch", slugs, RELATED_LIMIT);
        for _ in 0..5 {
            assert_eq!(related_slugs("launch", slugs, RELATED_LIMIT), first);
        }
        assert_eq!(first.len(), 3);
        assert!(!first.contains(&"launch"));
    }

    #[test]
    fn test_related_slugs_small_sets() {
        assert_eq!(related_slugs("a", ["a", "b"], 3), vec!["b"]);
        assert!(related_slugs("a", ["a"], 3).is_empty());
        assert!(related_slugs("a", Vec::<&str>::new(), 3).is_empty());
    }

    #[test]
    fn test_related_prefers_curated_slugs() {
        let content = TestContent::new();
        content.page_with(ContentType::Blog, "launch", "related:\n  - roadmap\n  - ghost\n");
        for slug in ["roadmap", "hiring", "security", "pricing"] {
            content.page(ContentType::Blog, slug);
        }
        let set = content.discover(true).unwrap();
        let items: Vec<_> = set.items(ContentType::Blog).collect();
        let current = set.get(ContentType::Blog, "launch").unwrap();

        let picked = related(current, &items);
        assert_eq!(picked.len(), 3);
        assert_eq!(picked[0].slug, "roadmap");
        assert!(picked.iter().all(|p| p.slug != "launch"));
        let unique: std::collections::HashSet<_> = picked.iter().map(|p| &p.slug).collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_next_index_wraps() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(next_index(5, 0), 0);
    }

    #[test]
    fn test_previous_index_wraps() {
        assert_eq!(previous_index(0, 3), 2);
        assert_eq!(previous_index(2, 3), 1);
        assert_eq!(previous_index(0, 0), 0);
    }

    #[test]
    fn test_next_visits_every_slug_once() {
        let slugs = ["a", "b", "c", "d"];
        let mut seen = Vec::new();
        let mut index = 0;
        for _ in 0..slugs.len() {
            seen.push(slugs[index]);
            index = next_index(index, slugs.len());
        }
        assert_eq!(seen, slugs);
        assert_eq!(index, 0);
    }

    #[test]
    fn test_case_study_wraps_to_first() {
        let slugs = ["a", "b", "c"];
        assert_eq!(next_slug(&slugs, "c"), Some("a"));
        assert_eq!(next_slug(&slugs, "a"), Some("b"));
        assert_eq!(previous_slug(&slugs, "a"), Some("c"));
        assert_eq!(next_slug(&slugs, "z"), None);
    }
}
