mod common;

use anyhow::Result;
use common::init_tracing;
use std::sync::Arc;
use tailbuf::{BufferOptions, TailBuffer};
use tokio::io::AsyncWriteExt;
use tokio::sync::{mpsc, Mutex};

#[tokio::test]
async fn reader_sees_latest_output() -> Result<()> {
    init_tracing();

    let options: BufferOptions = serde_json::from_str(r#"{"capacity": "16"}"#)?;
    let buffer = Arc::new(Mutex::new(options.build()?));
    let (tx, mut rx) = mpsc::channel::<Vec<u8>>(8);

    let pump = {
        let buffer = buffer.clone();
        tokio::spawn(async move {
            while let Some(chunk) = rx.recv().await {
                let mut guard = buffer.lock().await;
                if guard.write_all(&chunk).await.is_err() {
                    break;
                }
            }
        })
    };

    for n in 0..20 {
        tx.send(format!("$ step {n}\n").into_bytes()).await?;
    }
    drop(tx);
    pump.await?;

    let guard = buffer.lock().await;
    let text = guard.to_string_lossy();
    assert_eq!(text.len(), 16);
    assert!(text.ends_with("$ step 19\n"), "{text:?}");
    assert_eq!(guard.total_written(), 20 * 9 + 10 * 1);
    Ok(())
}

#[tokio::test]
async fn session_teardown_clears_history() -> Result<()> {
    let buffer = Arc::new(Mutex::new(TailBuffer::new(32)?));

    buffer.lock().await.write(b"old shell output");
    buffer.lock().await.reset();

    let guard = buffer.lock().await;
    assert!(guard.is_empty());
    assert!(guard.snapshot().is_empty());
    Ok(())
}
