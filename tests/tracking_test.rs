use markertrack_rs::{
    AnchorPose, ChangeBatch, ChangeFeed, ContentConfig, ContentTable, DispatcherBuilder,
    FeedError, InfoPresenter, MarkerDispatcher, MarkerId, Renderer, TrackedEvent,
    TrackedEventBuilder, TrackerPipeline, TrackingQuality, TrackingSource, UiShell,
};

#[derive(Debug, Clone, PartialEq)]
enum RenderCall {
    Instantiate { template: String, handle: u32, anchor: AnchorPose },
    SetVisible(u32, bool),
    Destroy(u32),
}

/// Renderer double with a fixed set of templates keyed by marker name.
#[derive(Default)]
struct SceneDouble {
    templates: Vec<String>,
    next_handle: u32,
    calls: Vec<RenderCall>,
}

impl SceneDouble {
    fn with_templates(names: &[&str]) -> Self {
        Self {
            templates: names.iter().map(|n| n.to_string()).collect(),
            ..Self::default()
        }
    }

    fn live_visuals(&self) -> i64 {
        self.calls.iter().fold(0, |live, call| match call {
            RenderCall::Instantiate { .. } => live + 1,
            RenderCall::Destroy(_) => live - 1,
            RenderCall::SetVisible(..) => live,
        })
    }

    fn destroys(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, RenderCall::Destroy(_)))
            .count()
    }
}

impl Renderer for SceneDouble {
    type Template = String;
    type Handle = u32;

    fn find_template(&self, marker_id: &MarkerId) -> Option<String> {
        self.templates
            .iter()
            .find(|t| t.as_str() == marker_id.as_str())
            .cloned()
    }

    fn instantiate(&mut self, template: &String, anchor: &AnchorPose) -> u32 {
        self.next_handle += 1;
        self.calls.push(RenderCall::Instantiate {
            template: template.clone(),
            handle: self.next_handle,
            anchor: *anchor,
        });
        self.next_handle
    }

    fn set_visible(&mut self, handle: &u32, visible: bool) {
        self.calls.push(RenderCall::SetVisible(*handle, visible));
    }

    fn destroy(&mut self, handle: u32) {
        self.calls.push(RenderCall::Destroy(handle));
    }
}

#[derive(Default)]
struct ShellDouble {
    button: bool,
    panel: bool,
    text: String,
}

impl UiShell for ShellDouble {
    fn set_button_visible(&mut self, visible: bool) {
        self.button = visible;
    }

    fn set_panel_visible(&mut self, visible: bool) {
        self.panel = visible;
    }

    fn set_panel_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn dispatcher(templates: &[&str], table: ContentTable) -> MarkerDispatcher<SceneDouble, ShellDouble> {
    init_logging();
    DispatcherBuilder::new()
        .renderer(SceneDouble::with_templates(templates))
        .presenter(InfoPresenter::new(table, ShellDouble::default()))
        .build()
        .unwrap()
}

fn shell(d: &MarkerDispatcher<SceneDouble, ShellDouble>) -> &ShellDouble {
    d.presenter().unwrap().shell()
}

#[test]
fn test_marker_switch_scenario() {
    let table = ContentTable::build([("Marker1", "Text A")]);
    let mut d = dispatcher(&["Marker1"], table);

    // Frame 1: Marker1 detected and tracking
    d.on_change(&ChangeBatch::new().added(TrackedEvent::new("Marker1", TrackingQuality::Tracking)));
    assert_eq!(shell(&d).text, "Text A");
    assert!(shell(&d).button);
    assert_eq!(d.state().visible_handle(), Some(&1));

    // Frame 2: Marker2 appears with no pose yet and has no template
    d.on_change(&ChangeBatch::new().added(TrackedEvent::new("Marker2", TrackingQuality::None)));
    assert_eq!(d.renderer().destroys(), 1);
    assert!(!d.state().has_visual());
    assert_eq!(d.active_marker(), Some(&MarkerId::new("Marker2")));
    assert!(shell(&d).text.contains("Marker2"));
    assert!(shell(&d).button);

    // Open the panel, then lose Marker2
    d.button_clicked();
    assert!(shell(&d).panel);

    d.on_change(&ChangeBatch::new().removed(TrackedEvent::new("Marker2", TrackingQuality::None)));
    let presenter = d.presenter().unwrap();
    assert!(!presenter.state().button_visible);
    assert!(!presenter.state().panel_expanded);
    assert!(!shell(&d).button);
    assert!(!shell(&d).panel);
    assert_eq!(d.renderer().calls.len(), 2);
}

#[test]
fn test_visual_is_anchored_to_marker_pose() {
    let mut d = dispatcher(&["Marker1"], ContentTable::default());
    let event = TrackedEventBuilder::new("Marker1")
        .tracking()
        .position(0.5, 0.0, -1.0)
        .euler(0.0, 0.0, 1.0)
        .build();
    let anchor = event.anchor;
    d.on_change(&ChangeBatch::new().added(event));

    assert_eq!(
        d.renderer().calls,
        vec![RenderCall::Instantiate {
            template: "Marker1".into(),
            handle: 1,
            anchor,
        }]
    );
}

#[test]
fn test_dropout_hides_then_recovers_without_churn() {
    let table = ContentTable::build([("Marker1", "Text A")]);
    let mut d = dispatcher(&["Marker1"], table);

    d.on_change(&ChangeBatch::new().added(TrackedEvent::new("Marker1", TrackingQuality::Tracking)));
    d.on_change(&ChangeBatch::new().updated(TrackedEvent::new("Marker1", TrackingQuality::Limited)));
    assert!(!shell(&d).button);
    assert!(d.presenter().unwrap().current_marker_for_info().is_none());

    d.on_change(&ChangeBatch::new().updated(TrackedEvent::new("Marker1", TrackingQuality::Tracking)));
    assert!(shell(&d).button);
    assert_eq!(shell(&d).text, "Text A");
    assert_eq!(
        d.renderer().calls,
        vec![
            RenderCall::Instantiate {
                template: "Marker1".into(),
                handle: 1,
                anchor: AnchorPose::identity(),
            },
            RenderCall::SetVisible(1, false),
            RenderCall::SetVisible(1, true),
        ]
    );
}

#[test]
fn test_missing_template_does_not_stop_batch() {
    let table = ContentTable::build([("Marker1", "Text A")]);
    let mut d = dispatcher(&["Marker1"], table);

    let batch = ChangeBatch::new()
        .added(TrackedEvent::new("Orphan", TrackingQuality::Tracking))
        .added(TrackedEvent::new("Marker1", TrackingQuality::Tracking))
        .updated(TrackedEvent::new("Marker1", TrackingQuality::Tracking));
    let report = d.on_change(&batch);

    assert_eq!(report.lines.len(), 3);
    assert_eq!(
        d.renderer().calls,
        vec![RenderCall::Instantiate {
            template: "Marker1".into(),
            handle: 1,
            anchor: AnchorPose::identity(),
        }]
    );
    assert_eq!(d.active_marker(), Some(&MarkerId::new("Marker1")));
    assert_eq!(d.state().visible_handle(), Some(&1));
    assert_eq!(shell(&d).text, "Text A");
    assert!(shell(&d).button);
}

#[test]
fn test_at_most_one_visual_over_long_sequence() {
    let names = ["Marker1", "Marker2", "Marker3", "Orphan"];
    let qualities = [
        TrackingQuality::Tracking,
        TrackingQuality::Limited,
        TrackingQuality::None,
    ];
    let mut d = dispatcher(&names[..3], ContentTable::default());

    // Deterministic LCG so the sequence is stable across runs
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = |n: usize| {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        ((seed >> 33) as usize) % n
    };

    for _ in 0..500 {
        let mut batch = ChangeBatch::new();
        for _ in 0..next(3) {
            let event = TrackedEvent::new(names[next(4)], qualities[next(3)]);
            batch = match next(3) {
                0 => batch.added(event),
                1 => batch.updated(event),
                _ => batch.removed(event),
            };
        }
        d.on_change(&batch);

        let live = d.renderer().live_visuals();
        assert!((0..=1).contains(&live), "live visuals: {live}");
        assert_eq!(live == 1, d.state().has_visual());
        if d.state().has_visual() {
            assert!(d.active_marker().is_some());
        }
        let presenter = d.presenter().unwrap();
        if presenter.state().panel_expanded {
            assert!(presenter.state().button_visible);
        }
        if next(5) == 0 {
            d.button_clicked();
        }
    }
}

struct CameraDouble {
    feed: Option<ChangeFeed>,
}

impl TrackingSource for CameraDouble {
    fn attach(&mut self, feed: ChangeFeed) {
        self.feed = Some(feed);
    }
}

impl CameraDouble {
    fn emit(&self, batch: ChangeBatch) -> Result<(), FeedError> {
        match &self.feed {
            Some(feed) => feed.publish(batch),
            None => Err(FeedError::Disconnected),
        }
    }
}

#[test]
fn test_pipeline_applies_batches_in_order() {
    let table = ContentConfig::from_json(
        r#"{ "markers": [ { "marker": "Marker1", "content": "Text A" } ] }"#,
    )
    .unwrap()
    .into_table();
    let mut camera = CameraDouble { feed: None };
    let mut pipeline = TrackerPipeline::new(&mut camera, dispatcher(&["Marker1"], table));

    camera
        .emit(ChangeBatch::new().added(TrackedEvent::new("Marker1", TrackingQuality::Tracking)))
        .unwrap();
    camera
        .emit(ChangeBatch::new().updated(TrackedEvent::new("Marker1", TrackingQuality::None)))
        .unwrap();

    let reports = pipeline.pump();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].text(), "Added: Marker1 Tracking\n");
    assert_eq!(reports[1].text(), "Updated: Marker1 None\n");
    assert!(pipeline.pump().is_empty());

    let d = pipeline.dispatcher();
    assert_eq!(d.state().visible_handle(), None);
    assert!(d.state().has_visual());

    // Dropping the pipeline releases the subscription
    drop(pipeline);
    assert_eq!(camera.emit(ChangeBatch::new()), Err(FeedError::Disconnected));
}
