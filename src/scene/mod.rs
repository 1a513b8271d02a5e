pub mod context;

use std::time::Duration;

use log::{debug, trace};

use crate::element::GameObject;

use self::context::Context;

/// Container driving per-frame position integration over a collection
/// of bodies. Force integration (gravity, air friction) is configured
/// through `Context` but deliberately not applied here.
#[derive(Default)]
pub struct Scene {
    objects: Vec<Box<dyn GameObject>>,
    context: Context,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    #[inline]
    pub fn with_context(context: Context) -> Self {
        Self {
            context,
            ..Default::default()
        }
    }

    pub fn push_object(&mut self, object: impl GameObject + 'static) -> usize {
        self.objects.push(Box::new(object));
        let index = self.objects.len() - 1;
        debug!("object {} joined the scene", index);
        index
    }

    #[inline]
    pub fn get_object(&self, index: usize) -> Option<&dyn GameObject> {
        self.objects.get(index).map(|object| &**object)
    }

    #[inline]
    pub fn get_object_mut(&mut self, index: usize) -> Option<&mut (dyn GameObject + 'static)> {
        self.objects.get_mut(index).map(move |object| &mut **object)
    }

    #[inline]
    pub fn objects_iter(&self) -> impl Iterator<Item = &dyn GameObject> {
        self.objects.iter().map(|object| &**object)
    }

    #[inline]
    pub fn objects_iter_mut(&mut self) -> impl Iterator<Item = &mut (dyn GameObject + 'static)> + '_ {
        self.objects.iter_mut().map(move |object| &mut **object)
    }

    #[inline]
    pub fn context(&self) -> &Context {
        &self.context
    }

    #[inline]
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    /// Advance every active, non-static object by one Euler step.
    /// Ordering across objects is the caller's frame order, one object
    /// at a time; no forces are applied.
    pub fn update_objects_by_duration(&mut self, delta_time: Duration) {
        trace!("scene tick, delta {:?}", delta_time);
        self.objects
            .iter_mut()
            .filter(|object| object.is_active() && !object.is_static())
            .for_each(|object| object.integrate_position(delta_time));
    }
}
