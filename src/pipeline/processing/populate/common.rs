use super::standards_key;
use crate::constants::{
    DATE_END, DATE_START, PERIOD_END, PERIOD_START, SCALE_MINIMUM, SEAMARK_INFORMATION,
    SEAMARK_NAME,
};
use crate::dataset::{FeatureName, Information, MemberCommon};
use crate::domain::AtonRecord;
use crate::pipeline::processing::geometry::{bounding_shape, geometry_for};
use crate::pipeline::processing::tags::TagLookup;
use crate::pipeline::TransformContext;

/// Copy the attributes every AtoN member carries
pub fn populate_common(ctx: &mut TransformContext<'_>, record: &AtonRecord) -> MemberCommon {
    let id = ctx.record_id(record);
    let bounded_by = bounding_shape([record], &ctx.settings.srs_name);
    let geometry = Some(geometry_for(ctx, record));

    let settings = ctx.settings;
    let tags = TagLookup::new(record);

    let feature_names = tags
        .string(SEAMARK_NAME)
        .map(|name| FeatureName {
            name,
            language: settings.language.clone(),
            display_name: true,
        })
        .into_iter()
        .collect();

    let information = tags
        .string(SEAMARK_INFORMATION)
        .map(|text| Information {
            text,
            language: settings.language.clone(),
        })
        .into_iter()
        .collect();

    MemberCommon {
        id,
        bounded_by,
        geometry,
        feature_names,
        information,
        date_start: tags.date(&standards_key(settings, DATE_START)),
        date_end: tags.date(&standards_key(settings, DATE_END)),
        period_start: tags.date(&standards_key(settings, PERIOD_START)),
        period_end: tags.date(&standards_key(settings, PERIOD_END)),
        scale_minimum: tags.number::<u64>(&standards_key(settings, SCALE_MINIMUM)),
    }
}
