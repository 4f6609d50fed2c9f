//! Easing curves and per-word pose tweens.
//!
//! Every word carries an [`Animated`] pose. Scheduling a tween always starts
//! from the pose currently on screen and replaces whatever tween was in
//! flight, so rapid hover changes never queue or jump.

/// Hermite smooth step on `[0, 1]`.
pub fn smooth_step(t: f64) -> f64 {
	let t = t.clamp(0.0, 1.0);
	t * t * (3.0 - 2.0 * t)
}

/// Easing curve mapping normalized time to progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
	/// Constant speed.
	Linear,
	/// Fast start, slow finish.
	CubicOut,
	/// Cubic ease-in-out.
	InOut,
	/// Overshoots the target by an amount controlled by the parameter, then
	/// settles back.
	BackOut(f64),
}

impl Easing {
	/// Progress at normalized time `t`. Always 0 at `t = 0` and 1 at `t = 1`.
	pub fn apply(self, t: f64) -> f64 {
		let t = t.clamp(0.0, 1.0);
		match self {
			Easing::Linear => t,
			Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
			Easing::InOut => {
				if t < 0.5 {
					4.0 * t * t * t
				} else {
					1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
				}
			}
			Easing::BackOut(s) => {
				let u = t - 1.0;
				1.0 + (s + 1.0) * u * u * u + s * u * u
			}
		}
	}
}

/// Animated properties of a word. Position is canvas-centered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
	/// Center, canvas-centered coordinates.
	pub x: f64,
	/// Vertical center.
	pub y: f64,
	/// 1.0 at rest.
	pub scale: f64,
	/// Drawn opacity.
	pub opacity: f64,
}

impl Pose {
	/// Pose from its parts.
	pub fn new(x: f64, y: f64, scale: f64, opacity: f64) -> Self {
		Self {
			x,
			y,
			scale,
			opacity,
		}
	}

	/// Component-wise interpolation, `t = 0` gives `self`.
	pub fn lerp(&self, other: &Pose, t: f64) -> Pose {
		Pose {
			x: self.x + (other.x - self.x) * t,
			y: self.y + (other.y - self.y) * t,
			scale: self.scale + (other.scale - self.scale) * t,
			opacity: self.opacity + (other.opacity - self.opacity) * t,
		}
	}
}

/// A scheduled transition between two poses.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
	/// Start pose.
	pub from: Pose,
	/// Target pose.
	pub to: Pose,
	/// Seconds before motion starts.
	pub delay: f64,
	/// Seconds of motion after the delay.
	pub duration: f64,
	/// Curve applied to progress.
	pub easing: Easing,
	/// Go to `to` and come back to `from` within `duration`.
	pub yoyo: bool,
	elapsed: f64,
}

impl Tween {
	/// Tween from `from` to `to` without delay.
	pub fn new(from: Pose, to: Pose, duration: f64, easing: Easing) -> Self {
		Self {
			from,
			to,
			delay: 0.0,
			duration,
			easing,
			yoyo: false,
			elapsed: 0.0,
		}
	}

	/// Starts after `delay` seconds.
	pub fn with_delay(mut self, delay: f64) -> Self {
		self.delay = delay.max(0.0);
		self
	}

	/// Turns the tween into an out-and-back that ends on `from`.
	pub fn yoyo(mut self) -> Self {
		self.yoyo = true;
		self
	}

	/// Pose the tween settles at.
	pub fn end(&self) -> Pose {
		if self.yoyo { self.from } else { self.to }
	}

	/// Whether delay and duration have both elapsed.
	pub fn is_finished(&self) -> bool {
		self.elapsed >= self.delay + self.duration
	}

	fn advance(&mut self, dt: f64) {
		self.elapsed += dt;
	}

	/// Pose at the current time.
	pub fn sample(&self) -> Pose {
		if self.is_finished() {
			return self.end();
		}
		let active = (self.elapsed - self.delay).max(0.0);
		let t = if self.duration > 0.0 {
			active / self.duration
		} else {
			1.0
		};
		if self.yoyo {
			let leg = if t < 0.5 { t * 2.0 } else { (1.0 - t) * 2.0 };
			self.from.lerp(&self.to, self.easing.apply(leg))
		} else {
			self.from.lerp(&self.to, self.easing.apply(t))
		}
	}
}

/// What a word's current tween was scheduled for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenKind {
	/// Entry animation.
	Entry,
	/// Hover enter.
	Hover,
	/// Return to rest after hover.
	Rest,
	/// Filter fade.
	Filter,
	/// Idle nudge.
	Idle,
}

/// A pose with at most one tween driving it.
#[derive(Clone, Debug, PartialEq)]
pub struct Animated {
	/// Pose to draw this frame.
	pub current: Pose,
	tween: Option<(TweenKind, Tween)>,
}

impl Animated {
	/// A pose standing still.
	pub fn at(pose: Pose) -> Self {
		Self {
			current: pose,
			tween: None,
		}
	}

	/// Replaces any running tween with one from the current pose to `to`.
	pub fn animate_to(&mut self, kind: TweenKind, to: Pose, duration: f64, easing: Easing) -> &mut Tween {
		self.start(kind, Tween::new(self.current, to, duration, easing))
	}

	/// Replaces any running tween. `tween.from` is used as-is.
	pub fn start(&mut self, kind: TweenKind, tween: Tween) -> &mut Tween {
		self.current = tween.sample();
		&mut self.tween.insert((kind, tween)).1
	}

	/// Changes the opacity the running tween lands on, or the current
	/// opacity when idle.
	pub fn retarget_opacity(&mut self, opacity: f64) {
		match self.tween.as_mut() {
			Some((_, tween)) if !tween.yoyo => tween.to.opacity = opacity,
			_ => self.current.opacity = opacity,
		}
	}

	/// Kind of the running tween.
	pub fn kind(&self) -> Option<TweenKind> {
		self.tween.as_ref().map(|(kind, _)| *kind)
	}

	/// Whether any tween is running.
	pub fn is_animating(&self) -> bool {
		self.tween.is_some()
	}

	/// Advances time. Returns `true` while a tween is still running.
	pub fn tick(&mut self, dt: f64) -> bool {
		let Some((_, tween)) = self.tween.as_mut() else {
			return false;
		};
		tween.advance(dt);
		self.current = tween.sample();
		if tween.is_finished() {
			self.current = tween.end();
			self.tween = None;
			return false;
		}
		true
	}
}
