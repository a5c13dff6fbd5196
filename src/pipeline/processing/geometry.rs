use crate::dataset::{CurveProperty, Envelope, GeometryProperty, PointProperty, SurfaceProperty};
use crate::domain::{AtonRecord, Bounds, Coordinate, Geometry};
use crate::pipeline::TransformContext;

/// Wrap a position with a freshly allocated sub-identifier
pub fn point_property(ctx: &mut TransformContext<'_>, longitude: f64, latitude: f64) -> PointProperty {
    PointProperty {
        id: ctx.ids.allocate(None),
        srs_name: ctx.settings.srs_name.clone(),
        pos: [longitude, latitude],
    }
}

pub fn curve_property(ctx: &mut TransformContext<'_>, coordinates: &[Coordinate]) -> CurveProperty {
    CurveProperty {
        id: ctx.ids.allocate(None),
        srs_name: ctx.settings.srs_name.clone(),
        pos_list: coordinates.iter().map(|c| [c.x, c.y]).collect(),
    }
}

pub fn surface_property(ctx: &mut TransformContext<'_>, coordinates: &[Coordinate]) -> SurfaceProperty {
    SurfaceProperty {
        id: ctx.ids.allocate(None),
        srs_name: ctx.settings.srs_name.clone(),
        exterior: coordinates.iter().map(|c| [c.x, c.y]).collect(),
    }
}

/// Output geometry for a record. Almost every aid is a point; line and
/// polygon source geometries become curves and surfaces.
pub fn geometry_for(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> GeometryProperty {
    match &record.geometry {
        Some(Geometry::LineString(coords)) if !coords.is_empty() => {
            GeometryProperty::Curve(curve_property(ctx, coords))
        }
        Some(Geometry::Polygon(coords)) if !coords.is_empty() => {
            GeometryProperty::Surface(surface_property(ctx, coords))
        }
        _ => GeometryProperty::Point(point_property(ctx, record.longitude, record.latitude)),
    }
}

/// Fold each record's native geometry envelope into one bounding envelope.
/// `None` when no record contributes a coordinate.
pub fn bounding_shape<'r>(
    records: impl IntoIterator<Item = &'r AtonRecord>,
    srs_name: &str,
) -> Option<Envelope> {
    let bounds = records
        .into_iter()
        .filter_map(|r| r.native_geometry().bounds())
        .reduce(|mut acc: Bounds, b| {
            acc.expand_to_include(&b);
            acc
        })?;

    Some(Envelope::from_bounds(&bounds, srs_name))
}
