//! Recording fakes for the cast SDK seams
//!
//! One [`MockState`] is shared by the transport, every device manager it
//! hands out and every media channel those create, so tests can inspect the
//! calls made and set the link states the controller reads back.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use cast_sdk::{
    ApplicationMetadata, CastConfig, CastContext, CastEvent, CastTransport, Device, DeviceId,
    DeviceManager, ErrorCode, LinkState, ManualScanner, MediaChannel, MediaInformation,
    MediaStatus, SdkError, SessionId, TransportError, DEFAULT_RECEIVER_APP_ID,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateManager(DeviceId),
    Connect,
    Disconnect,
    LeaveApplication,
    LaunchApplication(String),
    JoinApplication(String, SessionId),
    CreateMediaChannel,
    LoadMedia {
        content_id: String,
        autoplay: bool,
        start_position: f64,
    },
    Play,
    Pause,
    Stop,
    Seek(f64),
    RequestStatus,
}

#[derive(Debug, Default)]
pub struct MockState {
    pub calls: Vec<Call>,
    pub link: LinkState,
    pub application_link: LinkState,
    pub media_status: Option<MediaStatus>,
    pub position: f64,
    pub loaded: Option<MediaInformation>,
    pub refuse_managers: bool,
}

pub type SharedState = Rc<RefCell<MockState>>;

pub struct MockTransport {
    state: SharedState,
}

impl MockTransport {
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }
}

impl CastTransport for MockTransport {
    fn device_manager(
        &mut self,
        device: &Device,
        _client_package_name: &str,
    ) -> Result<Box<dyn DeviceManager>, TransportError> {
        let mut state = self.state.borrow_mut();
        if state.refuse_managers {
            return Err(TransportError::new(ErrorCode::Unknown, "no manager"));
        }
        state.calls.push(Call::CreateManager(device.id.clone()));

        Ok(Box::new(MockDeviceManager {
            state: Rc::clone(&self.state),
        }))
    }
}

struct MockDeviceManager {
    state: SharedState,
}

impl DeviceManager for MockDeviceManager {
    fn connect(&mut self) {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::Connect);
        state.link = LinkState::Connecting;
    }

    fn disconnect(&mut self) {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::Disconnect);
        state.link = LinkState::Disconnecting;
    }

    fn leave_application(&mut self) {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::LeaveApplication);
        state.application_link = LinkState::Disconnecting;
    }

    fn launch_application(&mut self, application_id: &str) {
        let mut state = self.state.borrow_mut();
        state
            .calls
            .push(Call::LaunchApplication(application_id.to_string()));
        state.application_link = LinkState::Connecting;
    }

    fn join_application(&mut self, application_id: &str, session_id: &SessionId) {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::JoinApplication(
            application_id.to_string(),
            session_id.clone(),
        ));
        state.application_link = LinkState::Connecting;
    }

    fn connection_state(&self) -> LinkState {
        self.state.borrow().link
    }

    fn application_connection_state(&self) -> LinkState {
        self.state.borrow().application_link
    }

    fn create_media_channel(&mut self) -> Box<dyn MediaChannel> {
        self.state.borrow_mut().calls.push(Call::CreateMediaChannel);
        Box::new(MockMediaChannel {
            state: Rc::clone(&self.state),
        })
    }
}

struct MockMediaChannel {
    state: SharedState,
}

impl MockMediaChannel {
    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }
}

impl MediaChannel for MockMediaChannel {
    fn load_media(&mut self, media: &MediaInformation, autoplay: bool, start_position: f64) {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::LoadMedia {
            content_id: media.content_id.clone(),
            autoplay,
            start_position,
        });
        state.loaded = Some(media.clone());
    }

    fn play(&mut self) {
        self.record(Call::Play);
    }

    fn pause(&mut self) {
        self.record(Call::Pause);
    }

    fn stop(&mut self) {
        self.record(Call::Stop);
    }

    fn seek(&mut self, position: f64) {
        self.record(Call::Seek(position));
    }

    fn request_status(&mut self) {
        self.record(Call::RequestStatus);
    }

    fn media_status(&self) -> Option<MediaStatus> {
        self.state.borrow().media_status.clone()
    }

    fn approximate_stream_position(&self) -> f64 {
        self.state.borrow().position
    }
}

/// Route controller logs to the test harness; honours `RUST_LOG`
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn context_with(config: CastConfig, mock: SharedState) -> Result<CastContext, SdkError> {
    CastContext::new(
        config,
        Box::new(MockTransport::new(mock)),
        Box::new(ManualScanner::new()),
    )
}

/// Build a context over fresh mocks without unwrapping
pub fn try_context(config: CastConfig) -> Result<CastContext, SdkError> {
    context_with(config, SharedState::default())
}

/// A context wired to the mocks, plus helpers that play the SDK's part
pub struct Harness {
    pub cast: CastContext,
    pub mock: SharedState,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(CastConfig::default())
    }

    pub fn with_config(config: CastConfig) -> Self {
        init_test_logging();
        let mock = SharedState::default();
        let cast = context_with(config, Rc::clone(&mock)).unwrap();
        Self { cast, mock }
    }

    pub fn discover(&mut self, id: &str, name: &str) -> Device {
        let device = Device::new(id, name);
        self.cast.handle_event(CastEvent::DeviceOnline(device.clone()));
        device
    }

    pub fn lose(&mut self, id: &str) {
        self.cast
            .handle_event(CastEvent::DeviceOffline(DeviceId::new(id)));
    }

    pub fn transport_up(&mut self) {
        self.mock.borrow_mut().link = LinkState::Connected;
        self.cast.handle_event(CastEvent::TransportConnected);
    }

    pub fn application_joined(&mut self, session_id: &str, launched: bool) {
        self.mock.borrow_mut().application_link = LinkState::Connected;
        self.cast.handle_event(CastEvent::ApplicationJoined {
            metadata: ApplicationMetadata::new(DEFAULT_RECEIVER_APP_ID, "Default Media Receiver"),
            session_id: SessionId::new(session_id),
            launched,
        });
    }

    /// Discover `id`, let auto-connect run, and launch `session_id`
    pub fn connect_to(&mut self, id: &str, session_id: &str) -> Device {
        let device = self.discover(id, "Living Room TV");
        self.transport_up();
        self.application_joined(session_id, true);
        device
    }

    pub fn drop_connection(&mut self, error: Option<TransportError>) {
        {
            let mut mock = self.mock.borrow_mut();
            mock.link = LinkState::Disconnected;
            mock.application_link = LinkState::Disconnected;
        }
        self.cast
            .handle_event(CastEvent::TransportDisconnected { error });
    }

    /// End the application session while the transport stays up
    pub fn drop_application(&mut self, error: Option<TransportError>) {
        self.mock.borrow_mut().application_link = LinkState::Disconnected;
        self.cast
            .handle_event(CastEvent::ApplicationDisconnected { error });
    }

    pub fn join_failed(&mut self, error: TransportError) {
        self.mock.borrow_mut().application_link = LinkState::Disconnected;
        self.cast
            .handle_event(CastEvent::ApplicationJoinFailed { error });
    }

    /// Make the receiver report `status` at `position` seconds
    pub fn push_status(&mut self, status: MediaStatus, position: f64) {
        {
            let mut mock = self.mock.borrow_mut();
            mock.media_status = Some(status);
            mock.position = position;
        }
        self.cast.handle_event(CastEvent::MediaStatusUpdated);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.mock.borrow().calls.clone()
    }

    pub fn clear_calls(&mut self) {
        self.mock.borrow_mut().calls.clear();
    }

    pub fn loaded(&self) -> Option<MediaInformation> {
        self.mock.borrow().loaded.clone()
    }
}

pub fn network_error() -> TransportError {
    TransportError::new(ErrorCode::NetworkError, "network unreachable")
}

pub fn fatal_error() -> TransportError {
    TransportError::new(ErrorCode::DeviceAuthenticationFailed, "authentication failed")
}
