use crate::constants::{
    FOLLOWER_PRESS_SCALE, FOLLOWER_REST_SCALE, FOLLOWER_SCALE_DURATION, RIPPLE_DURATION,
    RIPPLE_END_OPACITY, RIPPLE_END_SCALE,
};
use crate::input::{event_position, InputSample};
use crate::render::{ElementKind, OnComplete, RenderError, Renderer, StyleProp};
use instant::{Duration, Instant};
use smallvec::SmallVec;

#[derive(Clone, Debug)]
struct Ripple<E> {
    element: E,
    expires: Instant,
}

/// Pointer follower plus press ripples.
#[derive(Debug)]
pub struct PointerTracker<E> {
    follower: Option<E>,
    ripples: SmallVec<[Ripple<E>; 4]>,
}

impl<E> Default for PointerTracker<E> {
    fn default() -> Self {
        Self {
            follower: None,
            ripples: SmallVec::new(),
        }
    }
}

impl<E: Clone> PointerTracker<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the follower element. Calling it again is a no-op.
    pub fn setup<R>(&mut self, renderer: &mut R) -> Result<(), RenderError>
    where
        R: Renderer<Element = E>,
    {
        if self.follower.is_none() {
            self.follower = Some(renderer.create_element(ElementKind::Follower)?);
        }
        Ok(())
    }

    pub fn follower(&self) -> Option<&E> {
        self.follower.as_ref()
    }

    /// Ripples whose animation has not finished yet.
    pub fn live_ripples(&self) -> impl Iterator<Item = &E> {
        self.ripples.iter().map(|r| &r.element)
    }

    pub fn update_position<R>(&mut self, renderer: &mut R, sample: &InputSample, now: Instant)
    where
        R: Renderer<Element = E>,
    {
        self.prune(renderer, now);
        let Some(pos) = event_position(sample) else {
            log::trace!("[tracker] move without position ignored");
            return;
        };
        if let Some(f) = &self.follower {
            renderer.set_position(f, pos);
        }
        for r in &self.ripples {
            renderer.set_position(&r.element, pos);
        }
    }

    /// Grow the follower and spawn a ripple that fades out and removes itself.
    pub fn create_ripple_effect<R>(
        &mut self,
        renderer: &mut R,
        sample: &InputSample,
        now: Instant,
    ) -> Result<(), RenderError>
    where
        R: Renderer<Element = E>,
    {
        self.prune(renderer, now);
        self.scale(renderer, FOLLOWER_PRESS_SCALE);
        let Some(pos) = event_position(sample) else {
            log::trace!("[tracker] press without position, no ripple");
            return Ok(());
        };

        let element = renderer.create_element(ElementKind::Ripple)?;
        renderer.set_position(&element, pos);
        renderer.animate(
            &element,
            &[
                StyleProp::Scale(RIPPLE_END_SCALE),
                StyleProp::Opacity(RIPPLE_END_OPACITY),
            ],
            RIPPLE_DURATION,
            OnComplete::Remove,
        );
        self.ripples.push(Ripple {
            element,
            expires: now + Duration::from_secs_f32(RIPPLE_DURATION),
        });
        Ok(())
    }

    pub fn release<R>(&mut self, renderer: &mut R)
    where
        R: Renderer<Element = E>,
    {
        self.scale(renderer, FOLLOWER_REST_SCALE);
    }

    pub fn scale<R>(&self, renderer: &mut R, factor: f32)
    where
        R: Renderer<Element = E>,
    {
        if let Some(f) = &self.follower {
            renderer.set_scale(f, factor, FOLLOWER_SCALE_DURATION);
        }
    }

    /// Drop ripples whose fade has finished and remove their elements.
    ///
    /// The renderer may already have removed them on completion; removal
    /// must tolerate that.
    pub fn prune<R>(&mut self, renderer: &mut R, now: Instant)
    where
        R: Renderer<Element = E>,
    {
        self.ripples.retain(|r| {
            let live = now < r.expires;
            if !live {
                renderer.remove_element(&r.element);
            }
            live
        });
    }
}
