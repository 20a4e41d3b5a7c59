use phext::delimiter::{LINE_BREAK, SCROLL_BREAK};
use phext::{partition, serialize, Axis, Coordinate, DelimiterSet, Document};

/// Deterministic generator so failures reproduce.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

fn random_document(rng: &mut Lcg) -> String {
    let delimiters = DelimiterSet::STANDARD;
    let mut raw = String::new();
    for _ in 0..rng.below(40) {
        match rng.below(4) {
            0 => {
                let axis = Axis::ALL[rng.below(Axis::COUNT as u64) as usize];
                raw.push(delimiters.get(axis));
            }
            1 => raw.push(LINE_BREAK),
            _ => {
                let word = ["alpha", "beta", "γάμμα", "日本", "x"][rng.below(5) as usize];
                raw.push_str(word);
            }
        }
    }
    raw
}

#[test]
fn test_coordinates_strictly_increase() {
    let mut rng = Lcg(7);
    for _ in 0..200 {
        let raw = random_document(&mut rng);
        let result = partition(&raw, &DelimiterSet::STANDARD);
        for pair in result.scrolls.windows(2) {
            assert!(
                pair[0].coordinate < pair[1].coordinate,
                "{:?}: {} !< {}",
                raw,
                pair[0].coordinate,
                pair[1].coordinate
            );
        }
    }
}

#[test]
fn test_serializing_a_partition_reproduces_its_scrolls() {
    let mut rng = Lcg(42);
    for _ in 0..200 {
        let raw = random_document(&mut rng);
        let first = partition(&raw, &DelimiterSet::STANDARD).to_map();
        let rebuilt = serialize(first.clone(), &DelimiterSet::STANDARD);
        let second = partition(&rebuilt, &DelimiterSet::STANDARD).to_map();
        assert_eq!(first, second, "raw {:?} rebuilt {:?}", raw, rebuilt);
    }
}

#[test]
fn test_normalizing_is_idempotent() {
    let mut rng = Lcg(1234);
    for _ in 0..100 {
        let doc = Document::new(random_document(&mut rng));
        let once = doc.normalize();
        assert_eq!(once.normalize(), once);
        assert!(once.raw().len() <= doc.raw().len());
    }
}

#[test]
fn test_every_listed_scroll_can_be_selected() {
    let mut rng = Lcg(99);
    for _ in 0..100 {
        let doc = Document::new(random_document(&mut rng));
        for scroll in doc.scrolls() {
            assert_eq!(doc.select(scroll.coordinate), Some(scroll.text));
        }
    }
}

#[test]
fn test_scroll_break_splits_leaves() {
    let raw = format!("A{}B", SCROLL_BREAK);
    let result = partition(&raw, &DelimiterSet::STANDARD);
    let listed: Vec<(String, &str)> = result
        .scrolls
        .iter()
        .map(|s| (s.coordinate.to_string(), s.text))
        .collect();
    assert_eq!(
        listed,
        vec![
            ("1.1.1/1.1.1/1.1.1".to_string(), "A"),
            ("1.1.1/1.1.1/1.1.2".to_string(), "B"),
        ]
    );
}

#[test]
fn test_edits_through_the_document_round_trip() {
    let target = Coordinate::from_address("3.1.4/1.5.9/2.6.5");
    let doc = Document::new("start")
        .replace(target, "pi")
        .unwrap()
        .append(target, " digits")
        .unwrap();

    assert_eq!(doc.select(target), Some("pi digits"));
    assert_eq!(doc.select(Coordinate::ORIGIN), Some("start"));

    let reparsed = Document::new(doc.raw().to_string());
    assert_eq!(reparsed.scrolls().len(), 2);
    assert_eq!(reparsed.remove(target).raw(), "start");
}
