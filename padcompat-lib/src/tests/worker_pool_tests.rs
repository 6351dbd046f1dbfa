use super::*;

#[tokio::test]
async fn processes_every_item() {
    let items: Vec<u32> = (1..=20).collect();
    let mut pool = WorkerPool::start(3, items, |n| async move { n * 2 });

    let mut results = Vec::new();
    while let Some(r) = pool.recv().await {
        results.push(r);
    }
    results.sort_unstable();
    assert_eq!(results, (1..=20).map(|n| n * 2).collect::<Vec<_>>());
}

#[tokio::test]
async fn zero_workers_still_runs() {
    let mut pool = WorkerPool::start(0, vec!["a", "b"], |s| async move { s.len() });
    let mut count = 0;
    while pool.recv().await.is_some() {
        count += 1;
    }
    assert_eq!(count, 2);
}

#[tokio::test]
async fn empty_input_finishes() {
    let mut pool = WorkerPool::start(2, Vec::<u8>::new(), |b| async move { b });
    assert!(pool.recv().await.is_none());
}
