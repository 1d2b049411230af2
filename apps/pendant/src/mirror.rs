//! Forwards transmitted frames to an optional TCP peer. The console only ever
//! enqueues; all socket work happens on this thread's runtime.

use std::thread::{self, JoinHandle};

use console::MirrorFrame;
use crossbeam_channel::Receiver;
use tokio::{io::AsyncWriteExt, net::TcpStream};

pub fn spawn_mirror(addr: Option<String>, frames: Receiver<MirrorFrame>) -> JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(error) => {
                tracing::error!(%error, "failed to start mirror runtime; frames will be discarded");
                for _ in frames.iter() {}
                return;
            }
        };
        runtime.block_on(forward(addr, frames));
    })
}

async fn forward(addr: Option<String>, frames: Receiver<MirrorFrame>) {
    let mut stream = match addr {
        Some(addr) => match TcpStream::connect(addr.as_str()).await {
            Ok(stream) => {
                tracing::info!(%addr, "mirror connected");
                Some(stream)
            }
            Err(error) => {
                tracing::warn!(%addr, %error, "mirror connection failed; transmitting nowhere");
                None
            }
        },
        None => None,
    };

    while let Ok(frame) = frames.recv() {
        let Some(active) = stream.as_mut() else {
            tracing::trace!(?frame, "no mirror peer; frame discarded");
            continue;
        };
        if let Err(error) = active.write_all(&frame.to_bytes()).await {
            tracing::warn!(%error, "mirror write failed; disabling mirror");
            stream = None;
        }
    }
    tracing::debug!("mirror queue closed");
}
