//! Recognition engine seam.
//!
//! The dispatcher never does speech recognition itself. An engine turns audio
//! (or anything else) into [`EngineEvent`]s, which the dispatcher drains with
//! [`RecognitionEngine::poll_events`] on its own thread of control.
//!
//! [`LineEngine`] is the adapter shipped with the CLI: every line read from
//! stdin, or from the stdout of an external recognizer process, is one final
//! transcript.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Read};
use std::process::{Child, Command, Stdio};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, info, warn};

/// One hypothesis for a recognized segment
#[derive(Debug, Clone, PartialEq)]
pub struct Alternative {
    pub transcript: String,
    pub confidence: f32,
}

/// One recognized segment with its alternatives, best first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecognitionResult {
    pub alternatives: Vec<Alternative>,
    /// False while the engine may still revise this segment
    pub is_final: bool,
}

impl RecognitionResult {
    /// A final segment with a single alternative
    pub fn final_text(transcript: impl Into<String>) -> Self {
        Self {
            alternatives: vec![Alternative {
                transcript: transcript.into(),
                confidence: 1.0,
            }],
            is_final: true,
        }
    }

    /// An interim segment with a single alternative
    pub fn interim(transcript: impl Into<String>) -> Self {
        Self {
            is_final: false,
            ..Self::final_text(transcript)
        }
    }

    /// Transcript of the best alternative, empty when there is none
    pub fn best(&self) -> &str {
        self.alternatives
            .first()
            .map(|a| a.transcript.as_str())
            .unwrap_or("")
    }
}

/// Concatenate the best alternative of every segment into one transcript
pub fn join_transcript(results: &[RecognitionResult]) -> String {
    results.iter().map(RecognitionResult::best).collect()
}

/// Lifecycle and result events delivered by an engine
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Recognition has begun
    Start,
    /// All segments recognized so far in the current session.
    /// May repeat many times with interim segments.
    Result(Vec<RecognitionResult>),
    /// Recognition ended (explicit stop, silence timeout, or input exhausted)
    End,
    /// Opaque engine error code
    Error(String),
}

/// A speech-to-text engine the dispatcher drives
///
/// `start` and `stop` are requests: the engine reports what actually happened
/// through events, possibly later.
pub trait RecognitionEngine {
    fn start(&mut self);
    fn stop(&mut self);
    /// Drain events queued since the last call, in delivery order
    fn poll_events(&mut self) -> Vec<EngineEvent>;
}

/// Engine driven by the host: events are pushed through an [`EngineHandle`].
///
/// Useful when recognition runs elsewhere (a browser, a platform service) and
/// only its events reach this process. `start` and `stop` queue the matching
/// `Start`/`End` events the way a well-behaved engine would.
pub struct QueuedEngine {
    shared: Rc<RefCell<QueuedState>>,
}

#[derive(Debug, Default)]
struct QueuedState {
    events: VecDeque<EngineEvent>,
    start_requests: usize,
    stop_requests: usize,
}

/// Host side of a [`QueuedEngine`]
#[derive(Clone)]
pub struct EngineHandle {
    shared: Rc<RefCell<QueuedState>>,
}

impl QueuedEngine {
    pub fn new() -> (Self, EngineHandle) {
        let shared = Rc::new(RefCell::new(QueuedState::default()));
        let handle = EngineHandle {
            shared: Rc::clone(&shared),
        };
        (Self { shared }, handle)
    }
}

impl RecognitionEngine for QueuedEngine {
    fn start(&mut self) {
        let mut state = self.shared.borrow_mut();
        state.start_requests += 1;
        state.events.push_back(EngineEvent::Start);
    }

    fn stop(&mut self) {
        let mut state = self.shared.borrow_mut();
        state.stop_requests += 1;
        state.events.push_back(EngineEvent::End);
    }

    fn poll_events(&mut self) -> Vec<EngineEvent> {
        self.shared.borrow_mut().events.drain(..).collect()
    }
}

impl EngineHandle {
    pub fn push(&self, event: EngineEvent) {
        self.shared.borrow_mut().events.push_back(event);
    }

    /// Queue a single final transcript
    pub fn push_transcript(&self, transcript: impl Into<String>) {
        self.push(EngineEvent::Result(vec![RecognitionResult::final_text(
            transcript,
        )]));
    }

    pub fn push_error(&self, code: impl Into<String>) {
        self.push(EngineEvent::Error(code.into()));
    }

    /// Number of `start` requests the engine received
    pub fn start_requests(&self) -> usize {
        self.shared.borrow().start_requests
    }

    /// Number of `stop` requests the engine received
    pub fn stop_requests(&self) -> usize {
        self.shared.borrow().stop_requests
    }

    pub fn pending(&self) -> usize {
        self.shared.borrow().events.len()
    }
}

/// Where a [`LineEngine`] reads transcripts from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineSource {
    Stdin,
    /// External recognizer printing one transcript per line
    Process { program: String, args: Vec<String> },
}

impl LineSource {
    /// Whether this source can work on this host
    pub fn is_available(&self) -> bool {
        match self {
            LineSource::Stdin => true,
            LineSource::Process { program, .. } => program_exists(program),
        }
    }
}

impl std::fmt::Display for LineSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineSource::Stdin => write!(f, "stdin"),
            LineSource::Process { program, .. } => write!(f, "{}", program),
        }
    }
}

/// Check if a program is runnable: an existing path, or a name found on PATH
pub fn program_exists(program: &str) -> bool {
    if program.contains(std::path::MAIN_SEPARATOR) {
        return std::path::Path::new(program).exists();
    }

    #[cfg(windows)]
    let lookup = Command::new("where").arg(program).output();
    #[cfg(not(windows))]
    let lookup = Command::new("which").arg(program).output();

    lookup.map(|o| o.status.success()).unwrap_or(false)
}

/// Engine that treats each input line as a final transcript
pub struct LineEngine {
    source: LineSource,
    event_tx: Sender<EngineEvent>,
    event_rx: Receiver<EngineEvent>,
    /// Current session id, 0 while stopped. Reader threads only forward
    /// lines for the session they were started for.
    session: Arc<AtomicU64>,
    next_session: u64,
    child: Option<Child>,
    stdin_reader: Option<Arc<AtomicBool>>,
}

impl LineEngine {
    pub fn new(source: LineSource) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        Self {
            source,
            event_tx,
            event_rx,
            session: Arc::new(AtomicU64::new(0)),
            next_session: 0,
            child: None,
            stdin_reader: None,
        }
    }

    /// Build an engine for `source` if the source is usable on this host
    pub fn detect(source: LineSource) -> Option<Self> {
        if source.is_available() {
            Some(Self::new(source))
        } else {
            warn!("Recognizer '{}' not found", source);
            None
        }
    }

    pub fn source(&self) -> &LineSource {
        &self.source
    }

    pub fn is_running(&self) -> bool {
        self.session.load(Ordering::SeqCst) != 0
    }

    fn send(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }

    fn start_stdin(&mut self, session: u64) {
        // One reader for the lifetime of the engine; stdin cannot be reopened.
        let closed = match &self.stdin_reader {
            Some(closed) => Arc::clone(closed),
            None => {
                let closed = Arc::new(AtomicBool::new(false));
                spawn_line_reader(
                    std::io::stdin(),
                    ReaderSession::Shared,
                    Arc::clone(&self.session),
                    Arc::clone(&closed),
                    self.event_tx.clone(),
                );
                self.stdin_reader = Some(Arc::clone(&closed));
                closed
            }
        };

        if closed.load(Ordering::SeqCst) {
            debug!("stdin already closed");
            self.end_session(session);
        }
    }

    fn start_process(&mut self, session: u64, program: String, args: Vec<String>) {
        let spawned = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) => {
                warn!("Failed to start recognizer {}: {}", program, e);
                self.send(EngineEvent::Error(format!(
                    "audio-capture: failed to start {}: {}",
                    program, e
                )));
                self.end_session(session);
                return;
            }
        };

        info!("Recognizer {} started (pid {})", program, child.id());
        if let Some(stdout) = child.stdout.take() {
            spawn_line_reader(
                stdout,
                ReaderSession::Owned(session),
                Arc::clone(&self.session),
                Arc::new(AtomicBool::new(false)),
                self.event_tx.clone(),
            );
        }
        self.child = Some(child);
    }

    /// Close `session` and emit End, unless it is already closed
    fn end_session(&self, session: u64) {
        if self
            .session
            .compare_exchange(session, 0, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            self.send(EngineEvent::End);
        }
    }

    fn reap_child(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl RecognitionEngine for LineEngine {
    fn start(&mut self) {
        if self.is_running() {
            debug!("Recognition already running");
            return;
        }
        self.reap_child();

        self.next_session += 1;
        let session = self.next_session;
        self.session.store(session, Ordering::SeqCst);
        self.send(EngineEvent::Start);

        match self.source.clone() {
            LineSource::Stdin => self.start_stdin(session),
            LineSource::Process { program, args } => self.start_process(session, program, args),
        }
    }

    fn stop(&mut self) {
        let session = self.session.load(Ordering::SeqCst);
        if session == 0 {
            return;
        }
        // Close the session first so the reader sees EOF as already handled.
        self.end_session(session);
        self.reap_child();
    }

    fn poll_events(&mut self) -> Vec<EngineEvent> {
        self.event_rx.try_iter().collect()
    }
}

impl Drop for LineEngine {
    fn drop(&mut self) {
        self.reap_child();
    }
}

/// Which sessions a reader thread forwards lines for
#[derive(Debug, Clone, Copy)]
enum ReaderSession {
    /// Whatever session is current (stdin, shared across restarts)
    Shared,
    /// Only the session the reader was spawned for (one process per session)
    Owned(u64),
}

impl ReaderSession {
    fn accepts(self, current: u64) -> bool {
        match self {
            ReaderSession::Shared => current != 0,
            ReaderSession::Owned(id) => current == id,
        }
    }
}

fn spawn_line_reader<R: Read + Send + 'static>(
    input: R,
    reader_session: ReaderSession,
    session: Arc<AtomicU64>,
    closed: Arc<AtomicBool>,
    event_tx: Sender<EngineEvent>,
) {
    thread::spawn(move || {
        for line in BufReader::new(input).lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    let current = session.load(Ordering::SeqCst);
                    if reader_session.accepts(current) {
                        let _ = event_tx.send(EngineEvent::Error(format!("audio-capture: {}", e)));
                    }
                    break;
                }
            };

            if line.trim().is_empty() || !reader_session.accepts(session.load(Ordering::SeqCst)) {
                continue;
            }

            let event = EngineEvent::Result(vec![RecognitionResult::final_text(line)]);
            if event_tx.send(event).is_err() {
                return;
            }
        }

        closed.store(true, Ordering::SeqCst);
        let current = session.load(Ordering::SeqCst);
        if reader_session.accepts(current)
            && session
                .compare_exchange(current, 0, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
        {
            let _ = event_tx.send(EngineEvent::End);
        }
    });
}
