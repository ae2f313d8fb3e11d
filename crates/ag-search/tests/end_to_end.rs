//! End-to-end checks: search, render, and an independent recount.

use ag_core::{oracle, LetterVector, PropertyChecker, SentencePropertyChecker};
use ag_rng::DeterministicRng;
use ag_search::{
    run_all, search_pair, FixedPointSearch, RunConfig, SearchConfig, SearchError, SearchState,
    SentencePair, SentenceReport, SentenceTransform,
};

/// Lee Sallows' pangram, a fixed point for ("this pangram contains", "&").
const PANGRAM_COUNTS: [u32; 26] = [
    4, 1, 2, 1, 30, 6, 5, 7, 11, 1, 1, 2, 2, 18, 15, 2, 1, 5, 27, 18, 2, 7, 8, 2, 3, 1,
];

/// Budget for the full searches below. Random restarts make the cost
/// vary by seed; hundreds of millions of steps are typical. A release
/// build runs about 2.4M steps/s per search, so this allows a few hours.
const FULL_SEARCH_STEPS_MAX: u64 = 20_000_000_000;

fn assert_self_descriptive(report: &SentenceReport) {
    let recounted = oracle::string_vector(&report.sentence);
    assert_eq!(recounted, report.vector, "{}", report.sentence);

    let checker = SentencePropertyChecker::new(report);
    if let Err(failure) = checker.verify_all() {
        panic!("{}", checker.summary().format_report() + &failure.format_status());
    }
}

#[test]
fn known_fixed_point_is_found_immediately() {
    let transform = SentenceTransform::new("this pangram contains", "&");
    let fixed = LetterVector::from_counts(PANGRAM_COUNTS);
    let mut rng = DeterministicRng::new(1);

    let mut search = FixedPointSearch::from_candidate(&transform, SearchConfig::bounded(1), fixed);
    assert_eq!(search.state(), SearchState::Seeded);

    let found = search.run(&mut rng).unwrap();
    assert_eq!(search.state(), SearchState::Found);
    assert_eq!(found.vector, fixed);
    assert_eq!(found.stats.steps, 1);
    assert_eq!(found.stats.restarts, 0);
    assert_eq!(rng.calls_count(), 0);

    // Closure under the count function.
    assert_eq!(transform.apply(&found.vector).unwrap(), found.vector);
}

#[test]
fn known_fixed_point_recounts_from_text() {
    let pair = SentencePair::new("this pangram contains", "&").unwrap();
    let vector = LetterVector::from_counts(PANGRAM_COUNTS);
    let sentence = pair.transform().render(&vector).unwrap();

    assert_eq!(
        sentence,
        "this pangram contains four as, one b, two cs, one d, thirty es, six fs, five gs, \
         seven hs, eleven is, one j, one k, two ls, two ms, eighteen ns, fifteen os, two ps, \
         one q, five rs, twenty-seven ss, eighteen ts, two us, seven vs, eight ws, two xs, \
         three ys, & one z."
    );

    let report = SentenceReport {
        pair,
        sentence,
        vector,
        stats: Default::default(),
        seed: 0,
    };
    assert_self_descriptive(&report);
}

#[test]
fn near_miss_is_not_a_fixed_point() {
    let transform = SentenceTransform::new("this sentence has", "and");
    let vector = LetterVector::from_counts(PANGRAM_COUNTS);
    assert_ne!(transform.apply(&vector).unwrap(), vector);
}

#[test]
fn bounded_search_always_terminates() {
    let pair = SentencePair::new("this sentence has", "and").unwrap();

    for seed in 1..=4 {
        let mut rng = DeterministicRng::new(seed);
        match search_pair(&pair, SearchConfig::bounded(100_000), &mut rng) {
            Ok(report) => {
                assert!(report.stats.steps <= 100_000);
                assert_self_descriptive(&report);
            }
            Err(SearchError::Exhausted { steps, restarts }) => {
                assert_eq!(steps, 100_000);
                assert!(restarts > 0, "seed {} never hit a cycle", seed);
            }
            Err(e) => panic!("seed {}: unexpected error: {}", seed, e),
        }
    }
}

#[tokio::test]
async fn run_all_returns_one_outcome_per_pair() {
    let pairs = vec![
        SentencePair::new("kurt's self-referential sentence has", "and").unwrap(),
        SentencePair::new("this sentence has", "and").unwrap(),
    ];
    let config = RunConfig::new(2024).with_search(SearchConfig::bounded(500).with_max_restarts(3));

    let outcomes = run_all(pairs, config, |_, _| {}).await;
    assert_eq!(outcomes.len(), 2);
    for outcome in outcomes {
        match outcome {
            Ok(report) => assert_self_descriptive(&report),
            Err(e) => assert!(e.is_exhausted(), "unexpected error: {}", e),
        }
    }
}

#[test]
#[ignore = "full search; takes minutes to hours"]
fn this_sentence_has_converges() {
    let pair = SentencePair::new("this sentence has", "and").unwrap();
    let mut rng = DeterministicRng::new(42);

    let report = search_pair(&pair, SearchConfig::bounded(FULL_SEARCH_STEPS_MAX), &mut rng)
        .expect("no fixed point within the step budget");
    assert_self_descriptive(&report);
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "full search of the default pairs; takes minutes to hours"]
async fn default_pairs_converge() {
    let config = RunConfig::new(7).with_search(SearchConfig::bounded(FULL_SEARCH_STEPS_MAX));
    let outcomes = run_all(SentencePair::defaults(), config, |_, _| {}).await;

    for outcome in outcomes {
        let report = outcome.expect("no fixed point within the step budget");
        assert_self_descriptive(&report);
    }
}
