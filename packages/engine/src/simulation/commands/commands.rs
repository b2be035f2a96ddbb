use tracing::warn;

use crate::domain::{Body, BodyDesc, BodyId, BodySnapshot, EngineError, EngineResult};

use super::WorldCore;

pub(super) fn add_body(world: &mut WorldCore, mut body: Body) -> EngineResult<BodyId> {
    // Public fields may have been edited since construction.
    if !body.position.is_finite() {
        warn!(position = ?body.position, "rejected body with non-finite position");
        return Err(EngineError::NonFinite("position"));
    }
    if !body.velocity.is_finite() {
        warn!(velocity = ?body.velocity, "rejected body with non-finite velocity");
        return Err(EngineError::NonFinite("velocity"));
    }

    let id = BodyId(world.next_id);
    world.next_id = world.next_id.checked_add(1).ok_or_else(|| {
        warn!("body ids exhausted");
        EngineError::IdsExhausted
    })?;
    body.id = id;
    world.bodies.push(body);
    Ok(id)
}

pub(super) fn add_bodies_json(world: &mut WorldCore, json: &str) -> EngineResult<Vec<BodyId>> {
    let descs: Vec<BodyDesc> = serde_json::from_str(json)?;
    let bodies = descs
        .into_iter()
        .map(Body::new)
        .collect::<EngineResult<Vec<_>>>()
        .map_err(|err| {
            warn!(%err, "body list rejected");
            err
        })?;

    // The whole batch must fit in the remaining ids.
    let remaining = u32::MAX - world.next_id;
    if usize::try_from(remaining).is_ok_and(|r| r < bodies.len()) {
        return Err(EngineError::IdsExhausted);
    }

    let mut ids = Vec::with_capacity(bodies.len());
    for body in bodies {
        ids.push(add_body(world, body)?);
    }
    Ok(ids)
}

pub(super) fn remove_body(world: &mut WorldCore, id: BodyId) -> bool {
    match world.bodies.iter().position(|b| b.id == id) {
        Some(index) => {
            world.bodies.remove(index);
            true
        }
        None => {
            warn!(id = id.0, "remove_body: unknown id");
            false
        }
    }
}

pub(super) fn clear(world: &mut WorldCore) {
    world.bodies.clear();
    world.next_id = 1;
    world.frame = 0;
}

pub(super) fn snapshot_json(world: &WorldCore) -> EngineResult<String> {
    let snapshots: Vec<BodySnapshot> = world.bodies.iter().map(Body::snapshot).collect();
    Ok(serde_json::to_string(&snapshots)?)
}
