//! Condition predicates of the S3 rule set, indexed by condition id.
//!
//! Binding conditions (`assign`) store a derived value and are true when the
//! value is present. Conditions that read a derived value fail with
//! [`EndpointError::UnsetDerived`] when no earlier condition on the walk
//! bound it; the compiled graph never does that, so the error points at a
//! table/runtime mismatch.

use crate::context::{EvalContext, Slot};
use crate::error::{EndpointError, EndpointResult};
use crate::functions::{
    Arn, ParsedUrl, coalesce_eq, is_valid_host_label, is_virtual_hostable_s3_bucket, list_access,
    split, substring, uri_encode,
};

/// Number of conditions in the S3 rule set.
pub const CONDITION_COUNT: usize = 87;

impl EvalContext<'_> {
    /// Evaluate condition `id`.
    pub(crate) fn condition(&self, id: i32) -> EndpointResult<bool> {
        let p = self.params;
        let d = &self.derived;
        let bucket = self.bucket();
        let region = self.region();

        let outcome = match id {
            0 => region.is_some(),
            1 => bucket.is_some(),
            2 | 23 => bucket.and_then(Arn::parse).is_some(),
            3 => coalesce_eq(substring(bucket, 0, 6, true), "--x-s3"),
            4 => p.use_s3_express_control_endpoint.is_some(),
            5 => p.use_s3_express_control_endpoint != Some(false),
            6 => coalesce_eq(substring(bucket, 0, 7, true), "--xa-s3"),
            7 => p.disable_s3_express_session_auth.is_some(),
            8 => d.s3e_auth.assign(|| {
                Some(if p.disable_s3_express_session_auth.unwrap_or(false) {
                    "sigv4"
                } else {
                    "sigv4-s3express"
                })
            }),
            9 => p.disable_s3_express_session_auth != Some(false),
            10 => d.bucket_alias_suffix.assign(|| substring(bucket, 0, 7, true)),
            11 => slot_eq(&d.bucket_alias_suffix, "--op-s3")?,
            12 => d.region_prefix.assign(|| substring(bucket, 8, 12, true)),
            13 => d.outpost_id_ssa_2.assign(|| substring(bucket, 32, 49, true)),
            14 => d.hardware_type.assign(|| substring(bucket, 49, 50, true)),
            15 => d
                .s3e_fips
                .assign(|| Some(if p.use_fips { "-fips" } else { "" })),
            16 => d.region_partition.assign(|| self.partition(region)),
            17 => d
                .s3e_ds
                .assign(|| Some(if p.use_dual_stack { ".dualstack" } else { "" })),
            18 => p.endpoint.is_some(),
            19 => p.use_fips,
            20 => p.accelerate,
            21 => p.endpoint.as_deref().and_then(ParsedUrl::parse).is_some(),
            22 => p.force_path_style,
            24 => d.partition_result.assign(|| self.partition(region)),
            25 => d.partition_result.value()?.name == "aws-cn",
            26 => slot_is_host_label(&d.outpost_id_ssa_2, false)?,
            27 => bucket.is_some_and(|b| is_virtual_hostable_s3_bucket(b, false)),
            28 => d
                .url
                .assign(|| p.endpoint.as_deref().and_then(ParsedUrl::parse)),
            29 => bucket.is_some_and(|b| is_virtual_hostable_s3_bucket(b, true)),
            30 => d.url.value()?.scheme == "http",
            31 => d.bucket_arn.assign(|| bucket.and_then(Arn::parse)),
            32 => coalesce_eq(substring(bucket, 0, 4, false), "arn:"),
            33 => region.is_some_and(|r| is_valid_host_label(r, false)),
            34 => d.url.value()?.is_ip,
            35 => d.uri_encoded_bucket.assign(|| bucket.map(uri_encode)),
            36 => p.use_object_lambda_endpoint.is_some(),
            37 => p.use_object_lambda_endpoint != Some(false),
            38 => region.is_some_and(|r| is_valid_host_label(r, true)),
            39 => p.use_dual_stack,
            40 => coalesce_eq(substring(bucket, 21, 23, true), "--"),
            41 => coalesce_eq(substring(bucket, 16, 18, true), "--"),
            42 => p.disable_access_points.is_some(),
            43 => p.disable_access_points != Some(false),
            44 => list_access(&d.bucket_arn.value()?.resource_id, 4).is_some(),
            45 => list_access(&d.bucket_arn.value()?.resource_id, 2).is_some(),
            46 => coalesce_eq(substring(bucket, 27, 29, true), "--"),
            47 => coalesce_eq(substring(bucket, 19, 21, true), "--"),
            48 => slot_eq(&d.hardware_type, "e")?,
            49 => slot_eq(&d.hardware_type, "o")?,
            50 => coalesce_eq(substring(bucket, 26, 28, true), "--"),
            51 => {
                let arn = d.bucket_arn.value()?;
                d.arn_type.assign(|| resource_part(arn, 0))
            }
            52 => slot_eq(&d.arn_type, "")?,
            53 => slot_eq(&d.arn_type, "accesspoint")?,
            54 => {
                let arn = d.bucket_arn.value()?;
                d.access_point_name_ssa_1.assign(|| resource_part(arn, 1))
            }
            55 => slot_eq(&d.access_point_name_ssa_1, "")?,
            56 => d.bucket_arn.value()?.service == "s3-object-lambda",
            57 => d.bucket_arn.value()?.service == "s3-outposts",
            58 => {
                let arn = d.bucket_arn.value()?;
                d.outpost_id_ssa_1.assign(|| resource_part(arn, 1))
            }
            59 => d.bucket_arn.value()?.region.is_empty(),
            60 => {
                let arn = d.bucket_arn.value()?;
                d.bucket_partition
                    .assign(|| self.partition(Some(&arn.region)))
            }
            61 => p.use_arn_region.is_some(),
            62 => region == Some(d.bucket_arn.value()?.region.as_str()),
            63 => slot_is_host_label(&d.access_point_name_ssa_1, true)?,
            64 => !d.url.value()?.is_ip,
            65 => coalesce_eq(substring(bucket, 14, 16, true), "--"),
            66 => region == Some("aws-global"),
            67 => coalesce_eq(substring(bucket, 20, 22, true), "--"),
            68 => coalesce_eq(substring(bucket, 15, 17, true), "--"),
            69 => p.use_global_endpoint,
            70 => p.use_arn_region == Some(false),
            71 => slot_is_host_label(&d.outpost_id_ssa_1, false)?,
            72 => d.bucket_partition.value()?.name == d.partition_result.value()?.name,
            73 => is_valid_host_label(&d.bucket_arn.value()?.region, true),
            74 => region == Some("us-east-1"),
            75 => d.bucket_arn.value()?.service == "s3",
            76 => d
                .s3express_availability_zone_id
                .assign(|| bucket.and_then(|b| split(b, "--", 0).get(1).copied())),
            77 => d.bucket_arn.value()?.account_id.is_empty(),
            78 => p.disable_multi_region_access_points,
            79 => is_valid_host_label(&d.bucket_arn.value()?.account_id, false),
            80 => slot_is_host_label(&d.access_point_name_ssa_1, false)?,
            81 => {
                let arn = d.bucket_arn.value()?;
                d.outpost_type.assign(|| resource_part(arn, 2))
            }
            82 => {
                let arn = d.bucket_arn.value()?;
                d.access_point_name_ssa_2.assign(|| resource_part(arn, 3))
            }
            83 => d.mrap_partition.assign(|| self.partition(region)),
            84 => slot_eq(&d.outpost_type, "accesspoint")?,
            85 => d.bucket_arn.value()?.partition == d.mrap_partition.value()?.name,
            86 => slot_eq(&d.region_prefix, "beta")?,
            _ => return Err(EndpointError::UnknownCondition(id)),
        };
        Ok(outcome)
    }
}

/// Owned copy of an ARN resource component.
fn resource_part(arn: &Arn, index: usize) -> Option<String> {
    list_access(&arn.resource_id, index).map(str::to_owned)
}

/// Whether a computed slot holds `expected`; an absent value never matches.
fn slot_eq<T: AsRef<str>>(slot: &Slot<T>, expected: &str) -> EndpointResult<bool> {
    Ok(slot.computed()?.is_some_and(|v| v.as_ref() == expected))
}

fn slot_is_host_label<T: AsRef<str>>(slot: &Slot<T>, allow_dots: bool) -> EndpointResult<bool> {
    Ok(slot
        .computed()?
        .is_some_and(|v| is_valid_host_label(v.as_ref(), allow_dots)))
}
