use genrec::utils::*;
use std::collections::{HashMap, HashSet};

#[test]
fn test_generate_record_id() {
    let id = generate_record_id();

    // Should be exactly 24 characters
    assert_eq!(id.len(), 24);

    // Should contain only alphanumeric characters
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated ids should be different
    let id2 = generate_record_id();
    assert_ne!(id, id2);
}

#[test]
fn test_generate_record_id_uniqueness() {
    // A modest batch should never collide
    let ids: HashSet<String> = (0..1000).map(|_| generate_record_id()).collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn test_sample_up_to_keeps_small_pool() {
    let pool = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let sampled = sample_up_to(pool.clone(), 10);

    // Pool smaller than the limit passes through unchanged, order intact
    assert_eq!(sampled, pool);
}

#[test]
fn test_sample_up_to_keeps_pool_at_exact_limit() {
    let pool: Vec<u32> = (0..5).collect();
    let sampled = sample_up_to(pool.clone(), 5);

    // Pool exactly at the limit also passes through unchanged
    assert_eq!(sampled, pool);
}

#[test]
fn test_sample_up_to_downsamples_large_pool() {
    let pool: Vec<u32> = (0..20).collect();
    let sampled = sample_up_to(pool.clone(), 7);

    // Should return exactly the requested number of elements
    assert_eq!(sampled.len(), 7);

    // Every sampled element comes from the pool
    assert!(sampled.iter().all(|x| pool.contains(x)));

    // No element is returned twice
    let distinct: HashSet<u32> = sampled.iter().copied().collect();
    assert_eq!(distinct.len(), 7);
}

#[test]
fn test_sample_up_to_zero_limit() {
    let pool: Vec<u32> = (0..5).collect();
    assert!(sample_up_to(pool, 0).is_empty());
}

#[test]
fn test_sample_up_to_is_roughly_uniform() {
    // 3 out of 10 over 4000 rounds: every element expects 1200 picks with
    // a standard deviation of about 29. The bounds sit ten deviations out,
    // so a correct sampler practically never trips this.
    let pool: Vec<u32> = (0..10).collect();
    let mut counts: HashMap<u32, u32> = HashMap::new();

    for _ in 0..4000 {
        for picked in sample_up_to(pool.clone(), 3) {
            *counts.entry(picked).or_insert(0) += 1;
        }
    }

    // Every element gets picked at some point
    assert_eq!(counts.len(), 10);

    for (element, count) in counts {
        assert!(
            (900..=1500).contains(&count),
            "element {} picked {} times",
            element,
            count
        );
    }
}

#[test]
fn test_none_if_empty() {
    // Blank values collapse to None
    assert_eq!(none_if_empty("".to_string()), None);
    assert_eq!(none_if_empty("   ".to_string()), None);

    // Anything else passes through untouched
    assert_eq!(none_if_empty("x".to_string()), Some("x".to_string()));
    assert_eq!(none_if_empty(" x ".to_string()), Some(" x ".to_string()));
}

#[test]
fn test_escape_html() {
    // All five significant characters are replaced
    assert_eq!(
        escape_html("<b>\"R&B\" & 'more'</b>"),
        "&lt;b&gt;&quot;R&amp;B&quot; &amp; &#39;more&#39;&lt;/b&gt;"
    );

    // Plain text passes through unchanged
    assert_eq!(escape_html("Dreams - 1977"), "Dreams - 1977");
}
