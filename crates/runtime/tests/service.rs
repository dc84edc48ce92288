//! End-to-end tests of the game service over real stores.

use std::sync::Arc;
use std::sync::Mutex;

use game_content::ContentFactory;
use game_core::{CreatureId, CreatureRecord, Dex, Generation, SessionError};
use runtime::{
    BEST_SCORE_KEY, DexSource, FileStore, GameService, InMemoryStore, KeyValueStore,
    Rehydrated, RepositoryError, RetryPolicy, RuntimeError, SAVED_ANSWER_KEY, SAVED_GUESSES_KEY,
    SESSION_KEYS, SourceError,
};

fn record(id: u32, name: &str, height: f64, weight: f64, types: &[&str], generation: u32) -> CreatureRecord {
    CreatureRecord::new(
        CreatureId(id),
        name,
        height,
        weight,
        types.iter().copied(),
        Generation::from_ordinal(generation),
    )
}

fn small_dex() -> Dex {
    Dex::new([
        record(1, "bulbasaur", 0.7, 6.9, &["grass", "poison"], 1),
        record(4, "charmander", 0.6, 8.5, &["fire"], 1),
        record(7, "squirtle", 0.5, 9.0, &["water"], 1),
    ])
}

fn service(store: Arc<dyn KeyValueStore>, seed: u64) -> GameService {
    GameService::builder()
        .source(Arc::new(DexSource::new(small_dex())))
        .store(store)
        .retry(RetryPolicy::none())
        .seed(seed)
        .build()
        .unwrap()
}

/// A name in the dex that is not the current answer.
fn wrong_name(service: &GameService) -> String {
    let answer = service.session().answer().unwrap().id();
    small_dex()
        .records()
        .iter()
        .find(|r| r.id() != answer)
        .unwrap()
        .name()
        .to_string()
}

#[tokio::test]
async fn fresh_store_starts_a_game_and_saves_it() {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
    let mut service = service(store.clone(), 1);

    assert_eq!(service.rehydrate().await.unwrap(), Rehydrated::Fresh);

    assert!(service.session().answer().is_some());
    assert_eq!(service.session().attempts(), 0);
    assert!(store.get(SAVED_ANSWER_KEY).unwrap().is_some());
    assert_eq!(store.get(SAVED_GUESSES_KEY).unwrap().as_deref(), Some("[]"));
    assert_eq!(store.get(BEST_SCORE_KEY).unwrap(), None);
}

#[tokio::test]
async fn winning_updates_best_and_locks_the_round() {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
    let mut service = service(store.clone(), 2);
    service.rehydrate().await.unwrap();

    let miss = service.submit_guess_by_name(&wrong_name(&service)).await.unwrap();
    assert!(!miss.won);

    let answer = service.session().answer().unwrap().name().to_uppercase();
    let hit = service.submit_guess_by_name(&answer).await.unwrap();
    assert!(hit.won && hit.new_best);
    assert_eq!(hit.attempts, 2);
    assert_eq!(store.get(BEST_SCORE_KEY).unwrap().as_deref(), Some("2"));

    let err = service.submit_guess_by_name(&answer).await.unwrap_err();
    assert!(matches!(err, RuntimeError::Session(SessionError::RoundOver)));

    let previous = service.session().answer().unwrap().id();
    let next = service.start_new_game().await.unwrap().id();
    assert_ne!(previous, next);
    assert_eq!(service.session().attempts(), 0);
    assert_eq!(service.session().best(), Some(2));
}

#[tokio::test]
async fn saved_game_resumes_with_identical_feedback() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = service(Arc::new(FileStore::new(dir.path()).unwrap()), 3);
    first.rehydrate().await.unwrap();
    let wrong = wrong_name(&first);
    first.submit_guess_by_name(&wrong).await.unwrap();
    first.submit_guess_by_name(&wrong).await.unwrap();

    let mut second = service(Arc::new(FileStore::new(dir.path()).unwrap()), 99);
    let resumed = second.rehydrate().await.unwrap();

    assert_eq!(resumed, Rehydrated::Resumed { attempts: 2 });
    assert_eq!(second.session().answer(), first.session().answer());
    assert_eq!(second.session().guesses(), first.session().guesses());
    assert_eq!(second.session().best(), None);
}

#[tokio::test]
async fn unknown_name_changes_nothing() {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
    let mut service = service(store.clone(), 4);
    service.rehydrate().await.unwrap();
    let saved = store.get(SAVED_GUESSES_KEY).unwrap();

    let err = service.submit_guess_by_name("missingno").await.unwrap_err();

    assert!(matches!(err, RuntimeError::Source(SourceError::NotFound(_))));
    assert!(err.is_recoverable());
    assert_eq!(service.session().attempts(), 0);
    assert_eq!(store.get(SAVED_GUESSES_KEY).unwrap(), saved);
}

#[tokio::test]
async fn malformed_saves_fall_back_to_a_fresh_game() {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::with_entries([
        (SAVED_ANSWER_KEY, "{\"broken\":"),
        (SAVED_GUESSES_KEY, "[{\"id\": \"nope\"}]"),
        (BEST_SCORE_KEY, "5"),
    ]));
    let mut service = service(store, 5);

    assert_eq!(service.rehydrate().await.unwrap(), Rehydrated::Fresh);
    assert_eq!(service.session().attempts(), 0);
    assert_eq!(service.session().best(), Some(5));
}

#[tokio::test]
async fn guesses_without_an_answer_are_discarded() {
    let guesses = serde_json::to_string(&vec![record(4, "charmander", 0.6, 8.5, &["fire"], 1)]).unwrap();
    let store: Arc<dyn KeyValueStore> =
        Arc::new(InMemoryStore::with_entries([(SAVED_GUESSES_KEY, guesses)]));
    let mut service = service(store, 6);

    assert_eq!(service.rehydrate().await.unwrap(), Rehydrated::Fresh);
    assert_eq!(service.session().attempts(), 0);
}

/// Store whose reads or writes fail for chosen keys.
#[derive(Default)]
struct FlakyStore {
    inner: InMemoryStore,
    failing_reads: Mutex<Vec<&'static str>>,
    failing_writes: Mutex<Vec<&'static str>>,
}

impl FlakyStore {
    fn fail_reads(&self, keys: &[&'static str]) {
        *self.failing_reads.lock().unwrap() = keys.to_vec();
    }

    fn fail_writes(&self, keys: &[&'static str]) {
        *self.failing_writes.lock().unwrap() = keys.to_vec();
    }

    fn check(failing: &Mutex<Vec<&'static str>>, key: &str) -> runtime::repository::Result<()> {
        if failing.lock().unwrap().iter().any(|k| *k == key) {
            return Err(RepositoryError::Io(std::io::Error::other("disk full")));
        }
        Ok(())
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> runtime::repository::Result<Option<String>> {
        Self::check(&self.failing_reads, key)?;
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> runtime::repository::Result<()> {
        Self::check(&self.failing_writes, key)?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> runtime::repository::Result<()> {
        Self::check(&self.failing_writes, key)?;
        self.inner.remove(key)
    }

    fn keys(&self) -> runtime::repository::Result<Vec<String>> {
        self.inner.keys()
    }
}

fn saved(store: &FlakyStore) -> Vec<Option<String>> {
    SESSION_KEYS.iter().map(|key| store.inner.get(key).unwrap()).collect()
}

#[tokio::test]
async fn failed_write_leaves_the_session_untouched() {
    let store = Arc::new(FlakyStore::default());
    let mut service = service(store.clone(), 7);
    service.rehydrate().await.unwrap();
    let answer = service.session().answer().cloned();

    store.fail_writes(&SESSION_KEYS);

    let wrong = wrong_name(&service);
    let err = service.submit_guess_by_name(&wrong).await.unwrap_err();
    assert!(matches!(err, RuntimeError::Repository(_)));
    assert_eq!(service.session().attempts(), 0);

    assert!(service.start_new_game().await.is_err());
    assert_eq!(service.session().answer().cloned(), answer);
}

#[tokio::test]
async fn failed_new_game_keeps_the_saved_game_consistent() {
    let store = Arc::new(FlakyStore::default());
    let mut service = service(store.clone(), 9);
    service.rehydrate().await.unwrap();
    service.submit_guess_by_name(&wrong_name(&service)).await.unwrap();
    let before = saved(&store);

    store.fail_writes(&[SAVED_GUESSES_KEY]);
    let err = service.start_new_game().await.unwrap_err();
    assert!(matches!(err, RuntimeError::Repository(_)));
    assert_eq!(saved(&store), before);

    store.fail_writes(&[]);
    let mut reloaded = crate::service(store.clone(), 10);
    assert_eq!(
        reloaded.rehydrate().await.unwrap(),
        Rehydrated::Resumed { attempts: 1 }
    );
    assert_eq!(reloaded.session().answer(), service.session().answer());
    assert_eq!(reloaded.session().guesses(), service.session().guesses());
    assert!(!reloaded.session().is_won());
}

#[tokio::test]
async fn failed_answer_write_puts_the_guesses_back() {
    let store = Arc::new(FlakyStore::default());
    let mut service = service(store.clone(), 11);
    service.rehydrate().await.unwrap();
    service.submit_guess_by_name(&wrong_name(&service)).await.unwrap();
    let before = saved(&store);

    store.fail_writes(&[SAVED_ANSWER_KEY]);
    assert!(service.start_new_game().await.is_err());

    assert_eq!(saved(&store), before);
    assert_eq!(service.session().attempts(), 1);
}

#[tokio::test]
async fn failed_winning_write_records_neither_guess_nor_best() {
    let store = Arc::new(FlakyStore::default());
    let mut service = service(store.clone(), 12);
    service.rehydrate().await.unwrap();
    let answer = service.session().answer().unwrap().name().to_string();
    let before = saved(&store);

    store.fail_writes(&[SAVED_GUESSES_KEY]);
    assert!(service.submit_guess_by_name(&answer).await.is_err());
    assert_eq!(saved(&store), before);
    assert_eq!(store.inner.get(BEST_SCORE_KEY).unwrap(), None);

    store.fail_writes(&[BEST_SCORE_KEY]);
    assert!(service.submit_guess_by_name(&answer).await.is_err());
    assert_eq!(saved(&store), before);
    assert_eq!(service.session().attempts(), 0);
    assert_eq!(service.session().best(), None);

    store.fail_writes(&[]);
    let outcome = service.submit_guess_by_name(&answer).await.unwrap();
    assert!(outcome.won && outcome.new_best);
    assert_eq!(store.inner.get(BEST_SCORE_KEY).unwrap().as_deref(), Some("1"));
}

#[tokio::test]
async fn unreadable_best_score_keeps_the_game() {
    let store = Arc::new(FlakyStore::default());
    let mut first = service(store.clone(), 13);
    first.rehydrate().await.unwrap();
    first.submit_guess_by_name(&wrong_name(&first)).await.unwrap();
    let before = saved(&store);

    store.fail_reads(&[BEST_SCORE_KEY]);
    let mut second = service(store.clone(), 14);

    assert_eq!(
        second.rehydrate().await.unwrap(),
        Rehydrated::Resumed { attempts: 1 }
    );
    assert_eq!(second.session().answer(), first.session().answer());
    assert_eq!(second.session().best(), None);
    assert_eq!(saved(&store), before);
}

#[tokio::test]
async fn unreadable_game_is_an_error_and_is_not_overwritten() {
    let store = Arc::new(FlakyStore::default());
    let mut first = service(store.clone(), 15);
    first.rehydrate().await.unwrap();
    first.submit_guess_by_name(&wrong_name(&first)).await.unwrap();
    let before = saved(&store);

    for key in [SAVED_ANSWER_KEY, SAVED_GUESSES_KEY] {
        store.fail_reads(&[key]);
        let mut second = service(store.clone(), 16);

        let err = second.rehydrate().await.unwrap_err();

        assert!(matches!(err, RuntimeError::Repository(RepositoryError::Io(_))));
        assert!(second.session().answer().is_none());
        assert_eq!(saved(&store), before);
    }
}

#[tokio::test]
async fn plays_against_the_bundled_dataset() {
    let dex = ContentFactory::bundled().load_dex().unwrap();
    let mut service = GameService::builder()
        .source(Arc::new(DexSource::new(dex)))
        .store(Arc::new(InMemoryStore::new()))
        .seed(8)
        .build()
        .unwrap();
    service.rehydrate().await.unwrap();

    assert!(!service.suggest("char").is_empty());
    assert!(service.suggest("").is_empty());

    let answer = service.session().answer().unwrap().name().to_string();
    let outcome = service.submit_guess_by_name(&answer).await.unwrap();
    assert!(outcome.won);
    assert_eq!(service.session().best(), Some(1));
}

#[test]
fn builder_requires_source_and_store() {
    assert!(matches!(
        GameService::builder().build(),
        Err(RuntimeError::MissingSource)
    ));
    assert!(matches!(
        GameService::builder()
            .source(Arc::new(DexSource::new(small_dex())))
            .build(),
        Err(RuntimeError::MissingStore)
    ));
}
