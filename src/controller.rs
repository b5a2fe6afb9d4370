//! the theme state controller
//!
//! a [`ThemeController`] is the single owner of the current theme. it starts
//! uninitialized, moves to the registry's first theme on [`ThemeController::initialize`]
//! so the first render is reproducible, and picks a random theme once on
//! [`ThemeController::randomize`]. readers get a [`ThemeObserver`].
//!
//! auto-switching runs a tokio task that only posts ticks back to the
//! controller. the owner feeds them in with [`ThemeController::recv_tick`] or
//! [`ThemeController::drain_ticks`], and every tick carries the generation of
//! the task that produced it, so ticks from a cancelled task are dropped.
use {
    crate::{
        error::{Result, ThemeError},
        style::{StyleBundle, project},
        theme::{ThemeEntry, ThemeKey, ThemeRegistry},
    },
    rand::seq::IndexedRandom,
    std::{str::FromStr, sync::Arc, time::Duration},
    tokio::{
        runtime::Handle,
        sync::{mpsc, watch},
        task::JoinHandle,
        time::{self, Instant, MissedTickBehavior},
    },
    tracing::{debug, info, trace},
};

/// how long each theme stays up while auto-switching
pub const DEFAULT_AUTO_SWITCH_INTERVAL: Duration = Duration::from_secs(15);

/// the longest accepted auto-switch period
pub const MAX_AUTO_SWITCH_INTERVAL: Duration = Duration::from_secs(3600);

/// where the controller is in its startup sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// nothing selected yet
    Uninitialized,
    /// showing the fixed default theme
    Default,
    /// a random theme has been picked, interaction may change it
    Interactive,
}

/// a tick from the auto-switch task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tick {
    /// the generation of the task that sent it
    generation: u64,
}

/// the running auto-switch task
#[derive(Debug)]
struct AutoSwitchTask {
    /// generation ticks from this task carry
    generation: u64,
    /// the task itself
    handle: JoinHandle<()>,
}

/// owns the current theme selection
#[derive(Debug)]
pub struct ThemeController {
    /// the themes to choose from
    registry: Arc<ThemeRegistry>,
    /// the current theme, `None` until initialized
    current: Option<ThemeKey>,
    /// startup phase
    phase: Phase,
    /// auto-switch period
    interval: Duration,
    /// bumped every time auto-switching starts or stops
    generation: u64,
    /// the running auto-switch task, if any
    auto_switch: Option<AutoSwitchTask>,
    /// handed to auto-switch tasks
    tick_tx: mpsc::UnboundedSender<Tick>,
    /// ticks waiting to be applied
    tick_rx: mpsc::UnboundedReceiver<Tick>,
    /// pushes every change to observers
    publisher: watch::Sender<Option<ThemeKey>>,
}

impl ThemeController {
    /// make a new, uninitialized controller
    pub fn new(registry: Arc<ThemeRegistry>) -> Self {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        let (publisher, _) = watch::channel(None);

        Self {
            registry,
            current: None,
            phase: Phase::Uninitialized,
            interval: DEFAULT_AUTO_SWITCH_INTERVAL,
            generation: 0,
            auto_switch: None,
            tick_tx,
            tick_rx,
            publisher,
        }
    }

    /// set the auto-switch period, taking effect the next time auto-switching starts
    ///
    /// # Errors
    ///
    /// returns an error if `interval` is zero or longer than [`MAX_AUTO_SWITCH_INTERVAL`]
    pub fn with_interval(mut self, interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            crate::bail!("the auto-switch interval must be longer than zero");
        }

        if interval > MAX_AUTO_SWITCH_INTERVAL {
            crate::bail!(
                "the auto-switch interval must be at most {}s, got {}s",
                MAX_AUTO_SWITCH_INTERVAL.as_secs(),
                interval.as_secs()
            );
        }

        self.interval = interval;
        Ok(self)
    }

    /// the registry this controller picks from
    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// the current theme
    pub fn current(&self) -> Option<ThemeKey> {
        self.current
    }

    /// the current theme's registry entry
    pub fn current_entry(&self) -> Option<&ThemeEntry> {
        self.current.and_then(|key| self.registry.get(key).ok())
    }

    /// the startup phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// whether auto-switching is on
    pub fn is_auto_switching(&self) -> bool {
        self.auto_switch.is_some()
    }

    /// the auto-switch period
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// the styles of the current theme
    pub fn styles(&self) -> Option<StyleBundle> {
        self.current_entry().map(project)
    }

    /// get a read-only view that follows every change
    pub fn subscribe(&self) -> ThemeObserver {
        ThemeObserver {
            rx: self.publisher.subscribe(),
            registry: Arc::clone(&self.registry),
        }
    }

    /// select the registry's first theme
    ///
    /// never random and never read from the environment, so a first render
    /// always looks the same. does nothing once initialized.
    pub fn initialize(&mut self) -> ThemeKey {
        match (self.phase, self.current) {
            (Phase::Uninitialized, _) | (_, None) => {
                self.phase = Phase::Default;
                self.apply(self.registry.first())
            }
            (_, Some(current)) => current,
        }
    }

    /// pick a uniformly random theme, once
    ///
    /// # Errors
    ///
    /// returns [`ThemeError::Uninitialized`] before [`Self::initialize`]
    pub fn randomize(&mut self) -> Result<ThemeKey> {
        let mut rng = rand::rng();
        self.randomize_with(&mut rng)
    }

    /// [`Self::randomize`] with a caller supplied rng
    ///
    /// the second and later calls keep the current theme.
    ///
    /// # Errors
    ///
    /// returns [`ThemeError::Uninitialized`] before [`Self::initialize`]
    pub fn randomize_with<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) -> Result<ThemeKey> {
        let current = self.require_current()?;

        if self.phase == Phase::Interactive {
            debug!(theme = %current, "already randomized, keeping current theme");
            return Ok(current);
        }

        let Some(&key) = self.registry.keys().choose(rng) else {
            return Err(ThemeError::NotFound("any theme".to_string()));
        };

        self.phase = Phase::Interactive;
        Ok(self.apply(key))
    }

    /// move to the next theme in registry order, wrapping around
    ///
    /// # Errors
    ///
    /// returns [`ThemeError::Uninitialized`] before [`Self::initialize`]
    pub fn next(&mut self) -> Result<ThemeKey> {
        let current = self.require_current()?;
        let keys = self.registry.keys();
        let position = self
            .registry
            .position(current)
            .ok_or_else(|| ThemeError::NotFound(current.id().to_string()))?;

        let next = keys[(position + 1) % keys.len()];
        Ok(self.apply(next))
    }

    /// select a theme directly
    ///
    /// # Errors
    ///
    /// returns [`ThemeError::Uninitialized`] before [`Self::initialize`]
    /// returns [`ThemeError::InvalidKey`] if the key isn't registered, leaving the current theme alone
    pub fn set(&mut self, key: ThemeKey) -> Result<ThemeKey> {
        self.require_current()?;

        if !self.registry.contains(key) {
            return Err(ThemeError::InvalidKey(key.id().to_string()));
        }

        Ok(self.apply(key))
    }

    /// select a theme by its string id
    ///
    /// # Errors
    ///
    /// same as [`Self::set`], plus [`ThemeError::InvalidKey`] for unknown ids
    pub fn set_id(&mut self, id: &str) -> Result<ThemeKey> {
        self.require_current()?;
        self.set(ThemeKey::from_str(id)?)
    }

    /// turn auto-switching on or off, returning the new state
    ///
    /// # Errors
    ///
    /// returns [`ThemeError::Uninitialized`] before [`Self::initialize`]
    /// returns an error when turning it on outside of a tokio runtime
    pub fn toggle_auto_switch(&mut self) -> Result<bool> {
        self.require_current()?;

        if self.auto_switch.is_some() {
            self.stop_auto_switch();
        } else {
            self.start_auto_switch()?;
        }

        Ok(self.is_auto_switching())
    }

    /// what clicking the palette menu entry does: stop auto-switching if it
    /// is on, otherwise advance to the next theme
    ///
    /// # Errors
    ///
    /// returns [`ThemeError::Uninitialized`] before [`Self::initialize`]
    pub fn activate(&mut self) -> Result<ThemeKey> {
        let current = self.require_current()?;

        if self.auto_switch.is_some() {
            self.stop_auto_switch();
            Ok(current)
        } else {
            self.next()
        }
    }

    /// wait for the next live auto-switch tick and apply it
    ///
    /// stale ticks are skipped. pending forever while auto-switching is off.
    /// never resolves to `None` while the controller is alive, since it keeps
    /// a sender of its own; the `Option` only mirrors the channel.
    pub async fn recv_tick(&mut self) -> Option<ThemeKey> {
        loop {
            let tick = self.tick_rx.recv().await?;

            if let Some(key) = self.apply_tick(tick) {
                return Some(key);
            }
        }
    }

    /// apply every tick that has already arrived, returning the themes switched to
    pub fn drain_ticks(&mut self) -> Vec<ThemeKey> {
        let mut switched = Vec::new();

        while let Ok(tick) = self.tick_rx.try_recv() {
            if let Some(key) = self.apply_tick(tick) {
                switched.push(key);
            }
        }

        switched
    }

    /// spawn the auto-switch task
    fn start_auto_switch(&mut self) -> Result<()> {
        let runtime = Handle::try_current().map_err(|e| {
            ThemeError::Other(format!("auto-switching needs a tokio runtime: {}", e))
        })?;

        self.generation += 1;
        let generation = self.generation;
        let period = self.interval;
        let tx = self.tick_tx.clone();

        let handle = runtime.spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if tx.send(Tick { generation }).is_err() {
                    break;
                }
            }
        });

        self.auto_switch = Some(AutoSwitchTask { generation, handle });
        info!(interval = ?period, generation, "auto-switching enabled");
        Ok(())
    }

    /// cancel the auto-switch task and throw away anything it already sent
    fn stop_auto_switch(&mut self) {
        if let Some(task) = self.auto_switch.take() {
            task.handle.abort();
            self.generation += 1;

            let mut dropped = 0usize;
            while self.tick_rx.try_recv().is_ok() {
                dropped += 1;
            }

            info!(
                generation = task.generation,
                dropped, "auto-switching disabled"
            );
        }
    }

    /// apply a tick if it came from the running task
    fn apply_tick(&mut self, tick: Tick) -> Option<ThemeKey> {
        let live = self.auto_switch.as_ref().map(|task| task.generation);

        if live == Some(tick.generation) {
            self.next().ok()
        } else {
            trace!(generation = tick.generation, "dropping stale auto-switch tick");
            None
        }
    }

    /// the current theme, or an error if there is none yet
    fn require_current(&self) -> Result<ThemeKey> {
        self.current.ok_or(ThemeError::Uninitialized)
    }

    /// switch themes and tell observers
    fn apply(&mut self, key: ThemeKey) -> ThemeKey {
        let previous = self.current.replace(key);
        self.publisher.send_replace(Some(key));
        debug!(from = ?previous, to = %key, "theme changed");
        key
    }
}

impl Drop for ThemeController {
    fn drop(&mut self) {
        if let Some(task) = self.auto_switch.take() {
            task.handle.abort();
        }
    }
}

/// a read-only view of a controller's current theme
#[derive(Debug, Clone)]
pub struct ThemeObserver {
    /// the controller's change feed
    rx: watch::Receiver<Option<ThemeKey>>,
    /// the controller's registry
    registry: Arc<ThemeRegistry>,
}

impl ThemeObserver {
    /// the current theme
    pub fn current(&self) -> Option<ThemeKey> {
        *self.rx.borrow()
    }

    /// the current theme's display name
    pub fn name(&self) -> Option<&'static str> {
        self.current()
            .and_then(|key| self.registry.get(key).ok())
            .map(|entry| entry.name)
    }

    /// the styles of the current theme
    pub fn styles(&self) -> Option<StyleBundle> {
        self.current()
            .and_then(|key| self.registry.get(key).ok())
            .map(project)
    }

    /// wait for the theme to change
    ///
    /// returns `None` once the controller is gone.
    pub async fn changed(&mut self) -> Option<ThemeKey> {
        self.rx.changed().await.ok()?;
        *self.rx.borrow_and_update()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        rand::{SeedableRng, rngs::StdRng},
    };

    const INTERVAL: Duration = Duration::from_secs(15);

    fn controller() -> ThemeController {
        ThemeController::new(ThemeRegistry::builtin())
    }

    fn ready() -> ThemeController {
        let mut controller = controller();
        controller.initialize();
        controller
    }

    #[test]
    fn test_initialize_is_deterministic() {
        for _ in 0..20 {
            let mut controller = controller();
            assert_eq!(controller.phase(), Phase::Uninitialized);
            assert_eq!(controller.current(), None);
            assert_eq!(controller.initialize(), ThemeKey::BlueSerenity);
            assert_eq!(controller.phase(), Phase::Default);
        }
    }

    #[test]
    fn test_initialize_twice_is_a_noop() {
        let mut controller = ready();
        controller.set(ThemeKey::October).unwrap();
        assert_eq!(controller.initialize(), ThemeKey::October);
        assert_eq!(controller.phase(), Phase::Default);
    }

    #[test]
    fn test_operations_need_initialization() {
        let mut controller = controller();
        assert!(matches!(controller.next(), Err(ThemeError::Uninitialized)));
        assert!(matches!(controller.randomize(), Err(ThemeError::Uninitialized)));
        assert!(matches!(
            controller.set(ThemeKey::Pastel),
            Err(ThemeError::Uninitialized)
        ));
        assert!(matches!(
            controller.toggle_auto_switch(),
            Err(ThemeError::Uninitialized)
        ));
        assert!(controller.styles().is_none());
    }

    #[test]
    fn test_next_cycles_back_to_start() {
        let mut controller = ready();
        controller.set(ThemeKey::RedSunburst).unwrap();

        let count = controller.registry().count();
        let mut seen = Vec::with_capacity(count);
        for _ in 0..count {
            seen.push(controller.next().unwrap());
        }

        assert_eq!(controller.current(), Some(ThemeKey::RedSunburst));
        assert_eq!(seen.first(), Some(&ThemeKey::PastelDream));
        assert_eq!(seen[seen.len() - 2], ThemeKey::MutedEarthy);
    }

    #[test]
    fn test_next_wraps_from_last_to_first() {
        let mut controller = ready();
        controller.set(ThemeKey::October).unwrap();
        assert_eq!(controller.next().unwrap(), ThemeKey::BlueSerenity);
    }

    #[test]
    fn test_set_then_project_matches_palette() {
        let mut controller = ready();

        for key in ThemeKey::ALL {
            controller.set(key).unwrap();
            let entry = ThemeEntry::builtin(key);
            let styles = controller.styles().unwrap();
            assert_eq!(styles.key, key);
            assert_eq!(styles.background, entry.palette.background.lightest);
            assert_eq!(styles.text, entry.palette.accent.strong);
            assert_eq!(styles.accent, entry.palette.accent.medium);
        }
    }

    #[test]
    fn test_set_invalid_key_leaves_state_alone() {
        let mut controller = ready();
        controller.set(ThemeKey::Nightfall).unwrap();

        match controller.set_id("forest-green") {
            Err(ThemeError::InvalidKey(id)) => assert_eq!(id, "forest-green"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(controller.current(), Some(ThemeKey::Nightfall));

        let registry = ThemeRegistry::with_keys(&[ThemeKey::Pastel, ThemeKey::October]).unwrap();
        let mut small = ThemeController::new(Arc::new(registry));
        small.initialize();
        assert!(matches!(
            small.set(ThemeKey::Nightfall),
            Err(ThemeError::InvalidKey(_))
        ));
        assert_eq!(small.current(), Some(ThemeKey::Pastel));
    }

    #[test]
    fn test_randomize_is_one_shot() {
        let mut controller = ready();
        let mut rng = StdRng::seed_from_u64(7);

        let picked = controller.randomize_with(&mut rng).unwrap();
        assert_eq!(controller.phase(), Phase::Interactive);

        controller.next().unwrap();
        let after_next = controller.current();
        assert_eq!(controller.randomize_with(&mut rng).unwrap(), after_next.unwrap());
        assert_eq!(controller.current(), after_next);
        assert!(ThemeKey::ALL.contains(&picked));
    }

    #[test]
    fn test_randomize_is_uniform() {
        const TRIALS: usize = 13_000;
        let registry = ThemeRegistry::builtin();
        let mut rng = StdRng::seed_from_u64(0x7e57);
        let mut counts = [0usize; 13];

        for _ in 0..TRIALS {
            let mut controller = ThemeController::new(Arc::clone(&registry));
            controller.initialize();
            let key = controller.randomize_with(&mut rng).unwrap();
            counts[registry.position(key).unwrap()] += 1;
        }

        let expected = TRIALS / counts.len();
        for (i, count) in counts.into_iter().enumerate() {
            assert!(
                count > expected * 7 / 10 && count < expected * 13 / 10,
                "theme #{} picked {} times, expected about {}",
                i,
                count,
                expected
            );
        }
    }

    #[test]
    fn test_auto_switch_needs_a_runtime() {
        let mut controller = ready();
        assert!(controller.toggle_auto_switch().is_err());
        assert!(!controller.is_auto_switching());
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_switch_ticks_once_per_interval() {
        let mut controller = ready();
        let start = Instant::now();

        assert!(controller.toggle_auto_switch().unwrap());

        for (i, expected) in [ThemeKey::SummerSunset, ThemeKey::BrightGreen, ThemeKey::MutedEarthy]
            .into_iter()
            .enumerate()
        {
            assert_eq!(controller.recv_tick().await, Some(expected));
            let elapsed = start.elapsed();
            let due = INTERVAL * (i as u32 + 1);
            assert!(elapsed >= due && elapsed < due + Duration::from_secs(1));
        }

        assert!(!controller.toggle_auto_switch().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabling_stops_transitions() {
        let mut controller = ready();
        controller.toggle_auto_switch().unwrap();
        controller.toggle_auto_switch().unwrap();

        let waited = time::timeout(INTERVAL * 4, controller.recv_tick()).await;
        assert!(waited.is_err());
        assert_eq!(controller.current(), Some(ThemeKey::BlueSerenity));
    }

    #[tokio::test(start_paused = true)]
    async fn test_queued_tick_is_dropped_on_disable() {
        let mut controller = ready();
        controller.toggle_auto_switch().unwrap();
        let live = controller.generation;

        controller.tick_tx.send(Tick { generation: live }).unwrap();
        controller.toggle_auto_switch().unwrap();
        controller.tick_tx.send(Tick { generation: live }).unwrap();

        assert!(controller.drain_ticks().is_empty());
        assert_eq!(controller.current(), Some(ThemeKey::BlueSerenity));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reenabling_ignores_old_generation() {
        let mut controller = ready();
        controller.toggle_auto_switch().unwrap();
        let old = controller.generation;
        controller.toggle_auto_switch().unwrap();
        controller.toggle_auto_switch().unwrap();

        controller.tick_tx.send(Tick { generation: old }).unwrap();
        assert!(controller.drain_ticks().is_empty());

        let live = controller.generation;
        controller.tick_tx.send(Tick { generation: live }).unwrap();
        assert_eq!(controller.drain_ticks(), vec![ThemeKey::SummerSunset]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_activate_stops_or_advances() {
        let mut controller = ready();

        assert_eq!(controller.activate().unwrap(), ThemeKey::SummerSunset);

        controller.toggle_auto_switch().unwrap();
        assert_eq!(controller.activate().unwrap(), ThemeKey::SummerSunset);
        assert!(!controller.is_auto_switching());
    }

    #[tokio::test]
    async fn test_observer_follows_changes() {
        let mut controller = ready();
        let mut observer = controller.subscribe();
        assert_eq!(observer.current(), Some(ThemeKey::BlueSerenity));
        assert_eq!(observer.name(), Some("Blue Serenity"));

        controller.set(ThemeKey::CrimsonHues).unwrap();
        assert_eq!(observer.changed().await, Some(ThemeKey::CrimsonHues));
        assert_eq!(observer.styles(), controller.styles());

        drop(controller);
        assert_eq!(observer.changed().await, None);
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        assert!(controller().with_interval(Duration::ZERO).is_err());
        let controller = controller().with_interval(Duration::from_secs(3)).unwrap();
        assert_eq!(controller.interval(), Duration::from_secs(3));
    }

    #[test]
    fn test_overlong_interval_is_rejected() {
        assert!(controller().with_interval(Duration::from_secs(u64::MAX)).is_err());
        assert!(
            controller()
                .with_interval(MAX_AUTO_SWITCH_INTERVAL + Duration::from_secs(1))
                .is_err()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_longest_interval_still_ticks() {
        let mut controller = controller()
            .with_interval(MAX_AUTO_SWITCH_INTERVAL)
            .unwrap();
        controller.initialize();
        let start = Instant::now();

        assert!(controller.toggle_auto_switch().unwrap());
        assert_eq!(controller.recv_tick().await, Some(ThemeKey::SummerSunset));
        assert!(start.elapsed() >= MAX_AUTO_SWITCH_INTERVAL);
        assert!(controller.is_auto_switching());
    }
}
