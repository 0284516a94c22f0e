use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::arbitrator::{Arbitrator, BurstRequest};
use crate::config::DashboardConfig;
use crate::effect::{AnimationModule, BurstModule, ChampionModule, ModuleSignal};
use crate::frame_buffer::Frame;
use crate::health_bar::HealthBarRenderer;
use crate::input::InputReceiver;
use crate::layout::{FrameEncoder, StripLayout};
use crate::source::SourceId;
use crate::telemetry::GameSnapshot;

/// Dashboard - the frame production pipeline
///
/// Runs all producers on one logical thread. Producers hand frames to the
/// arbitrator as values; only the selected source reaches the output.
pub struct Dashboard<'a, const MAX_LEDS: usize, const KEYS: usize> {
    // External dependencies
    inputs: InputReceiver<'a, KEYS>,

    // Internal state
    snapshot: Option<GameSnapshot>,
    output: Option<Frame<MAX_LEDS>>,

    // Egress settings
    layout: StripLayout,
    brightness: u8,

    // Producers and arbitration
    health_bar: HealthBarRenderer<MAX_LEDS>,
    champion: Option<ChampionModule>,
    burst: BurstModule<MAX_LEDS>,
    arbitrator: Arbitrator,
}

impl<'a, const MAX_LEDS: usize, const KEYS: usize> Dashboard<'a, MAX_LEDS, KEYS> {
    pub fn new(inputs: InputReceiver<'a, KEYS>, config: &DashboardConfig) -> Self {
        let champion = config.champion.map(|id| id.to_module());
        let home = champion
            .as_ref()
            .map(<ChampionModule as AnimationModule<MAX_LEDS>>::source);

        Self {
            inputs,
            snapshot: None,
            output: None,
            layout: config.layout,
            brightness: config.brightness,
            health_bar: HealthBarRenderer::new(
                config.led_count,
                config.palette,
                config.health_bar,
            ),
            champion,
            burst: BurstModule::new(config.led_count),
            arbitrator: Arbitrator::new(&config.arbitration, home),
        }
    }

    /// Run one pipeline step
    ///
    /// `elapsed` is the time since the previous tick. Returns the frame
    /// forwarded to the output during this step, if any.
    pub fn tick(&mut self, now: Instant, elapsed: Duration) -> Option<&Frame<MAX_LEDS>> {
        self.output = None;
        self.process_inputs();
        self.arbitrator.advance(elapsed);

        // Champion events may start a burst, so they run before the burst advances
        let request = match &mut self.champion {
            Some(champion) => Self::drive(champion, &mut self.arbitrator, &mut self.output, now),
            None => None,
        };
        self.start_burst(request, now);

        let request = Self::drive(&mut self.burst, &mut self.arbitrator, &mut self.output, now);
        self.start_burst(request, now);

        self.render_health_bar();

        self.output.as_ref()
    }

    /// Currently selected source
    pub const fn current_source(&self) -> SourceId {
        self.arbitrator.current()
    }

    pub const fn arbitrator(&self) -> &Arbitrator {
        &self.arbitrator
    }

    /// Encoder for a physical strip of `OUT_LEDS` LEDs, set up with the
    /// configured layout and brightness
    pub const fn encoder<const OUT_LEDS: usize>(&self) -> FrameEncoder<MAX_LEDS, OUT_LEDS> {
        FrameEncoder::new(self.layout, self.brightness)
    }

    /// Last snapshot received from the poller
    pub fn snapshot(&self) -> Option<&GameSnapshot> {
        self.snapshot.as_ref()
    }

    /// Drain pending inputs (non-blocking)
    fn process_inputs(&mut self) {
        if let Some(snapshot) = self.inputs.take_snapshot() {
            if let Some(champion) = &mut self.champion {
                AnimationModule::<MAX_LEDS>::update(champion, &snapshot);
            }
            self.snapshot = Some(snapshot);
        }

        while let Some(key) = self.inputs.next_key() {
            match &mut self.champion {
                Some(champion) => champion.on_key_pressed(key),
                None => {
                    #[cfg(feature = "esp32-log")]
                    println!("[Dashboard] no champion module, ignoring key {:?}", key);
                }
            }
        }
    }

    /// Advance a module, forward its frame and apply its signals
    ///
    /// Returns the burst the arbitrator asked for, if any.
    fn drive<M: AnimationModule<MAX_LEDS>>(
        module: &mut M,
        arbitrator: &mut Arbitrator,
        output: &mut Option<Frame<MAX_LEDS>>,
        now: Instant,
    ) -> Option<BurstRequest> {
        if let Some(frame) = module.advance(now) {
            Self::forward(arbitrator, output, frame);
        }

        let mut request = None;
        while let Some(signal) = module.poll_signal() {
            match signal {
                ModuleSignal::Event(event) => {
                    if let Some(next) = arbitrator.on_event(event) {
                        request = Some(next);
                    }
                }
                ModuleSignal::Completed(id) => {
                    arbitrator.on_burst_complete(id);
                }
            }
        }
        request
    }

    fn start_burst(&mut self, request: Option<BurstRequest>, now: Instant) {
        let Some(request) = request else {
            return;
        };
        let id = self.burst.color_burst(request.color, request.duration, now);
        self.arbitrator.burst_started(id);
    }

    /// Render the health bar as the selected source or as a fallback
    fn render_health_bar(&mut self) {
        if self.arbitrator.current() == SourceId::HealthBar {
            let frame = self.health_bar.render(self.snapshot.as_ref());
            Self::forward(&mut self.arbitrator, &mut self.output, frame);
        } else if self.output.is_none() && self.arbitrator.fallback_due() {
            #[cfg(feature = "esp32-log")]
            println!(
                "[Dashboard] {} silent, rendering health bar",
                self.arbitrator.current().as_str()
            );
            self.output = Some(self.health_bar.render(self.snapshot.as_ref()));
        }
    }

    fn forward(
        arbitrator: &mut Arbitrator,
        output: &mut Option<Frame<MAX_LEDS>>,
        frame: Frame<MAX_LEDS>,
    ) {
        if arbitrator.offer(&frame) {
            *output = Some(frame);
        }
    }
}
