use crate::model::DermatomeLevel::*;
use crate::model::{Innervation, OrganSystem, VisceralSource};
use super::levels;

/// Visceral source registry, in definition order.
pub fn sources() -> Vec<VisceralSource> {
    vec![
        heart(),
        gallbladder(),
        diaphragm_central(),
        appendix(),
        kidney(),
        ureter(),
        pancreas(),
        spleen(),
    ]
}

const VAGUS: &str = "Vagus nerve (CN X)";

pub(super) fn heart() -> VisceralSource {
    VisceralSource::new(
        "heart",
        "Heart",
        OrganSystem::Cardiac,
        "cardiovascular-heart",
        Innervation {
            sympathetic_levels: levels(&[T1, T2, T3, T4, T5]),
            parasympathetic_source: Some(VAGUS.into()),
            afferent_pathway: "Cardiac plexus → sympathetic chain → T1-T5 dorsal horn".into(),
            central_processing: "Spinothalamic tract → thalamus → somatosensory cortex".into(),
        },
    )
    .with_conditions(["Myocardial infarction", "Angina pectoris", "Pericarditis"])
}

pub(super) fn gallbladder() -> VisceralSource {
    VisceralSource::new(
        "gallbladder",
        "Gallbladder",
        OrganSystem::Hepatobiliary,
        "digestive-gallbladder",
        Innervation {
            sympathetic_levels: levels(&[T7, T8, T9]),
            parasympathetic_source: Some(VAGUS.into()),
            afferent_pathway: "Greater splanchnic nerve → celiac plexus → T7-T9".into(),
            central_processing: "Visceral afferents converge with somatic afferents at T7-T9".into(),
        },
    )
    .with_conditions(["Cholecystitis", "Cholelithiasis", "Biliary colic"])
}

pub(super) fn diaphragm_central() -> VisceralSource {
    VisceralSource::new(
        "diaphragm-central",
        "Diaphragm (central portion)",
        OrganSystem::Pulmonary,
        "respiratory-diaphragm",
        Innervation {
            sympathetic_levels: levels(&[C3, C4, C5]),
            parasympathetic_source: None,
            afferent_pathway: "Phrenic nerve → C3-C5 dorsal horn".into(),
            central_processing: "C3-C5 afferents converge with shoulder dermatomes".into(),
        },
    )
    .with_conditions(["Subphrenic abscess", "Liver laceration", "Splenic rupture"])
}

pub(super) fn appendix() -> VisceralSource {
    VisceralSource::new(
        "appendix",
        "Appendix",
        OrganSystem::Gastrointestinal,
        "digestive-appendix",
        Innervation {
            sympathetic_levels: levels(&[T10]),
            parasympathetic_source: Some(VAGUS.into()),
            afferent_pathway: "Lesser splanchnic nerve → T10 dorsal horn".into(),
            central_processing: "Initial periumbilical (T10) → later localized to RLQ (somatic)".into(),
        },
    )
    .with_conditions(["Appendicitis"])
}

pub(super) fn kidney() -> VisceralSource {
    VisceralSource::new(
        "kidney",
        "Kidney",
        OrganSystem::Urogenital,
        "urinary-kidney",
        Innervation {
            sympathetic_levels: levels(&[T10, T11, T12, L1]),
            parasympathetic_source: None,
            afferent_pathway: "Renal plexus → least splanchnic nerve → T10-L1".into(),
            central_processing: "Visceral afferents converge with flank and groin dermatomes".into(),
        },
    )
    .with_conditions(["Nephrolithiasis", "Pyelonephritis", "Renal colic"])
}

pub(super) fn ureter() -> VisceralSource {
    VisceralSource::new(
        "ureter",
        "Ureter",
        OrganSystem::Urogenital,
        "urinary-ureter",
        Innervation {
            sympathetic_levels: levels(&[T11, T12, L1, L2]),
            parasympathetic_source: None,
            afferent_pathway: "Ureteric plexus → hypogastric plexus → T11-L2".into(),
            central_processing: "Pain migrates as stone moves: flank → groin → genitalia".into(),
        },
    )
    .with_conditions(["Ureteral stone", "Ureteric obstruction"])
}

pub(super) fn pancreas() -> VisceralSource {
    VisceralSource::new(
        "pancreas",
        "Pancreas",
        OrganSystem::Gastrointestinal,
        "digestive-pancreas",
        Innervation {
            sympathetic_levels: levels(&[T5, T6, T7, T8, T9]),
            parasympathetic_source: Some(VAGUS.into()),
            afferent_pathway: "Splanchnic nerves → celiac plexus → T5-T9".into(),
            central_processing: "Retroperitoneal position causes back referral".into(),
        },
    )
    .with_conditions(["Acute pancreatitis", "Chronic pancreatitis", "Pancreatic cancer"])
}

pub(super) fn spleen() -> VisceralSource {
    VisceralSource::new(
        "spleen",
        "Spleen",
        OrganSystem::Gastrointestinal,
        "lymphatic-spleen",
        Innervation {
            sympathetic_levels: levels(&[T6, T7, T8]),
            parasympathetic_source: None,
            afferent_pathway: "Splenic plexus → celiac plexus → T6-T8".into(),
            central_processing: "Diaphragmatic irritation (phrenic C3-C5) causes Kehr sign".into(),
        },
    )
    .with_conditions(["Splenic rupture", "Splenic infarct", "Splenomegaly"])
}
