use async_trait::async_trait;
use curriculum_etl::core::DocumentProvider;
use curriculum_etl::{
    CurriculumCache, CurriculumError, CurriculumExtractor, CurriculumQuery, DaySummary,
    ExtractionError, VocabularyEntry,
};
use std::sync::Arc;

const SCENARIO_A: &str = "Dag 1 – Greetings
1. おはよう – おはよう – Good morning
2. ありがとう – arigatou – Thank you
Dag 2 – Food
1. 水 – みず – Water
";

struct TextProvider(&'static str);

#[async_trait]
impl DocumentProvider for TextProvider {
    fn location(&self) -> String {
        "inline".to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, ExtractionError> {
        Ok(self.0.as_bytes().to_vec())
    }
}

fn query_for(text: &'static str) -> CurriculumQuery {
    let cache = CurriculumCache::new(Arc::new(TextProvider(text)), CurriculumExtractor::default());
    CurriculumQuery::new(Arc::new(cache))
}

fn summary(day_index: u32, title: &str, entry_count: usize) -> DaySummary {
    DaySummary {
        day_index,
        title: title.to_string(),
        entry_count,
    }
}

#[tokio::test]
async fn test_scenario_a_list_days_and_entry() {
    let query = query_for(SCENARIO_A);

    let days = query.list_days().await.unwrap();
    assert_eq!(days, vec![summary(1, "Greetings", 2), summary(2, "Food", 1)]);

    let day = query.get_day(1).await.unwrap();
    assert_eq!(
        day.entries()[1],
        VocabularyEntry::new("ありがとう", "arigatou", "Thank you").unwrap()
    );
    assert_eq!(day.entries()[1].example_sentence(), "");
}

#[tokio::test]
async fn test_scenario_b_statistics() {
    let stats = query_for(SCENARIO_A).get_statistics().await.unwrap();
    assert_eq!(stats.total_days, 2);
    assert_eq!(stats.total_entries, 3);
    assert_eq!(stats.average_entries_per_day, 1.5);
}

#[tokio::test]
async fn test_scenario_c_boundary_without_entries() {
    let query = query_for("Dag 1 – Nothing here\n\n");

    assert!(query.list_days().await.unwrap().is_empty());

    let stats = query.get_statistics().await.unwrap();
    assert_eq!(stats.total_days, 0);
    assert_eq!(stats.average_entries_per_day, 0.0);
}

#[tokio::test]
async fn test_scenario_d_day_not_found() {
    let err = query_for(SCENARIO_A).get_day(99).await.unwrap_err();
    assert!(matches!(err, CurriculumError::DayNotFound { day: 99 }));
}

#[tokio::test]
async fn test_malformed_line_does_not_end_day() {
    let query = query_for(
        "Dag 1 – Animals
1. いぬ – inu – Dog
-- page 4 --
1x. ??? broken
2. ねこ – neko – Cat
",
    );

    let day = query.get_day(1).await.unwrap();
    let terms: Vec<&str> = day.entries().iter().map(|e| e.term()).collect();
    assert_eq!(terms, vec!["いぬ", "ねこ"]);
}

#[tokio::test]
async fn test_entries_keep_source_order() {
    let query = query_for(
        "Dag 1 – Numbers
3. 三 – さん – Three
1. 一 – いち – One
2. 二 – に – Two
",
    );

    let day = query.get_day(1).await.unwrap();
    let translations: Vec<&str> = day.entries().iter().map(|e| e.translation()).collect();
    assert_eq!(translations, vec!["Three", "One", "Two"]);
}

#[tokio::test]
async fn test_consecutive_boundaries_keep_counter_position() {
    let query = query_for(
        "Dag 1 – Placeholder
Dag 2 – Colours
1. 赤 – あか – Red
",
    );

    let days = query.list_days().await.unwrap();
    assert_eq!(days, vec![summary(2, "Colours", 1)]);
    assert!(matches!(
        query.get_day(1).await,
        Err(CurriculumError::DayNotFound { day: 1 })
    ));
}

#[tokio::test]
async fn test_printed_numeral_is_cosmetic() {
    let query = query_for(
        "Dag 5 – First
1. 一 – いち – One
Dag 5 – Second
1. 二 – に – Two
Dag 1 – Third
1. 三 – さん – Three
",
    );

    let days = query.list_days().await.unwrap();
    let indices: Vec<u32> = days.iter().map(|d| d.day_index).collect();
    assert_eq!(indices, vec![1, 2, 3]);
    assert_eq!(days[2].title, "Third");
}

#[tokio::test]
async fn test_entries_before_first_day_are_ignored() {
    let query = query_for(
        "Introduction
1. 前 – まえ – Before
Dag 1 – Start
1. 後 – あと – After
",
    );

    assert_eq!(query.list_days().await.unwrap(), vec![summary(1, "Start", 1)]);
}

#[tokio::test]
async fn test_reading_sanitization_keeps_long_vowels() {
    let query = query_for("Dag 1 – Places\n1. 東京 – Tōkyō (capital); – Tokyo\n");

    let day = query.get_day(1).await.unwrap();
    assert_eq!(day.entries()[0].reading(), "Tōkyō capital");
    assert_eq!(day.entries()[0].translation(), "Tokyo");
}

#[tokio::test]
async fn test_lenient_entries() {
    let query = query_for(
        "Dag 1 – Mixed
1. 猫 — cat
2. 犬 –  – dog
",
    );

    let day = query.get_day(1).await.unwrap();
    assert_eq!(day.entries()[0].reading(), "");
    assert_eq!(day.entries()[0].translation(), "cat");
    assert_eq!(day.entries()[1].reading(), "");
    assert_eq!(day.entries()[1].translation(), "dog");
}

#[tokio::test]
async fn test_days_serialize_camel_case() {
    let days = query_for(SCENARIO_A).list_days().await.unwrap();
    let json = serde_json::to_value(&days).unwrap();
    assert_eq!(json[0]["dayIndex"], 1);
    assert_eq!(json[0]["entryCount"], 2);
    assert_eq!(json[1]["title"], "Food");
}
