use crate::model::BodyRegion::*;
use crate::model::DermatomeLevel::*;
use crate::model::Likelihood::{Classic, Common, Variant};
use crate::model::{
    ClinicalFeatures, Explanations, Mechanism, Pathway, PathwayStep, ReferralRegion,
    ReferredPainPattern,
};
use super::{levels, sources, strings};

/// Pain pattern catalog, in definition order.
pub fn patterns() -> Vec<ReferredPainPattern> {
    vec![
        cardiac(),
        gallbladder(),
        diaphragm(),
        appendix(),
        renal_ureteral(),
        pancreatic(),
    ]
}

fn cardiac() -> ReferredPainPattern {
    ReferredPainPattern {
        pattern_id: "cardiac-referred-pain".into(),
        source_name: "Cardiac Referred Pain".into(),
        source_organ: sources::heart(),
        referral_regions: vec![
            ReferralRegion::new(ArmLeft, Classic, "Left arm, especially ulnar distribution", "#E74C3C"),
            ReferralRegion::new(Jaw, Common, "Lower jaw, may be mistaken for dental pain", "#E74C3C"),
            ReferralRegion::new(ShoulderLeft, Common, "Left shoulder and upper back", "#E74C3C"),
            ReferralRegion::new(ChestAnterior, Classic, "Substernal pressure, may radiate across chest", "#C0392B"),
            ReferralRegion::new(Epigastrium, Variant, "Epigastric discomfort, may mimic indigestion", "#E74C3C"),
            ReferralRegion::new(ArmRight, Variant, "Right arm involvement (less common)", "#E74C3C"),
        ],
        dermatomal_basis: levels(&[T1, T2, T3, T4, T5, C8]),
        mechanism: Mechanism {
            theory: "Convergence-Projection Theory".into(),
            convergence_point: "T1-T5 dorsal horn neurons".into(),
            somatic_dermatomes: levels(&[T1, T2, C8]),
            visceral_dermatomes: levels(&[T1, T2, T3, T4, T5]),
            central_misinterpretation: "Brain interprets visceral cardiac afferents as originating from somatic T1-T2/C8 dermatomes (arm, chest wall)".into(),
        },
        pathway: Pathway {
            steps: vec![
                PathwayStep::new(1, "Heart (ischemic myocardium)", "cardiovascular-heart", "Ischemia releases adenosine, bradykinin, stimulating cardiac nociceptors", "#E74C3C", 2000),
                PathwayStep::new(2, "Cardiac plexus", "nervous-cardiac-plexus", "Visceral afferent signals travel via cardiac nerves", "#F39C12", 1500),
                PathwayStep::new(3, "Sympathetic chain (T1-T5)", "nervous-sympathetic-chain", "Signals ascend via sympathetic afferents", "#F1C40F", 1500),
                PathwayStep::new(4, "Dorsal horn (T1-T5)", "nervous-spinal-cord", "Visceral afferents converge with somatic afferents from arm/chest", "#2ECC71", 2000),
                PathwayStep::new(5, "Spinothalamic tract", "nervous-spinal-cord", "Second-order neurons cross and ascend", "#3498DB", 1500),
                PathwayStep::new(6, "Thalamus", "nervous-thalamus", "Pain signals relay to somatosensory cortex", "#9B59B6", 1500),
                PathwayStep::new(7, "Somatosensory cortex", "nervous-cerebral-cortex", "Brain misinterprets visceral input as arm/jaw pain", "#E74C3C", 2000),
            ],
            total_duration: 12000,
            loopable: true,
        },
        clinical_characteristics: ClinicalFeatures {
            quality: strings(&["Pressure", "Squeezing", "Tightness", "Heaviness"]),
            intensity: "Severe, often described as \"elephant sitting on chest\"".into(),
            timing: "Minutes to hours; relieved by rest or nitroglycerin in angina".into(),
            aggravating_factors: strings(&["Exertion", "Emotional stress", "Cold weather", "Heavy meals"]),
            relieving_factors: strings(&["Rest", "Nitroglycerin", "Sitting up (if pericarditis)"]),
            associated_symptoms: strings(&["Dyspnea", "Diaphoresis", "Nausea", "Lightheadedness"]),
            typical_patient: "Middle-aged to elderly with cardiac risk factors".into(),
        },
        explanations: Explanations {
            level1: "When your heart hurts, you might feel pain in your arm or jaw instead of your chest. This happens because the nerves get confused about where the pain is coming from.".into(),
            level2: "Heart pain often feels like pain in your left arm, jaw, or shoulder. This is called referred pain - the heart shares nerve connections with these body parts, so your brain has trouble telling exactly where the pain started.".into(),
            level3: "Cardiac referred pain occurs because visceral afferents from the heart enter the spinal cord at the same levels (T1-T5) as somatic nerves from the arm and chest wall. When the brain receives these overlapping signals, it interprets the pain as coming from the skin and muscles rather than the heart.".into(),
            level4: "The convergence-projection theory explains cardiac referred pain: visceral afferents from the heart travel via the cardiac plexus and sympathetic chain to synapse in the T1-T5 dorsal horn. These second-order neurons also receive input from somatic afferents of the corresponding dermatomes (arm, chest). Because somatic input is more common, the cortex interprets the signal as originating from the arm or jaw.".into(),
            level5: "Cardiac nociceptors are stimulated by ischemia-induced release of adenosine, bradykinin, and prostaglandins. These unmyelinated C-fiber afferents travel via the cardiac plexus through cervical and thoracic sympathetic ganglia to reach dorsal horn laminae I and V at T1-T5. Convergence with somatic afferents from C8-T2 dermatomes (medial arm, chest wall) results in cross-modal referral. The relatively sparse representation of visceral afferents in the somatotopic cortex, compared to the well-defined representation of somatic structures, underlies the brain's tendency to attribute the pain to cutaneous sources.".into(),
        },
    }
}

fn gallbladder() -> ReferredPainPattern {
    ReferredPainPattern {
        pattern_id: "gallbladder-referred-pain".into(),
        source_name: "Gallbladder Referred Pain".into(),
        source_organ: sources::gallbladder(),
        referral_regions: vec![
            ReferralRegion::new(RightUpperQuadrant, Classic, "Right upper abdominal pain, worse after fatty meals", "#27AE60"),
            ReferralRegion::new(ShoulderRight, Classic, "Right shoulder tip (scapular) pain", "#27AE60"),
            ReferralRegion::new(Epigastrium, Common, "Epigastric discomfort radiating rightward", "#2ECC71"),
            ReferralRegion::new(BackMid, Common, "Infrascapular back pain on the right", "#27AE60"),
        ],
        dermatomal_basis: levels(&[T7, T8, T9, C4]),
        mechanism: Mechanism {
            theory: "Convergence-Projection Theory".into(),
            convergence_point: "T7-T9 dorsal horn, plus phrenic (C3-C5) if diaphragm irritated".into(),
            somatic_dermatomes: levels(&[T7, T8, T9]),
            visceral_dermatomes: levels(&[T7, T8, T9]),
            central_misinterpretation: "Biliary visceral afferents are interpreted as T7-T9 somatic pain; diaphragmatic irritation refers to shoulder via phrenic nerve".into(),
        },
        pathway: Pathway {
            steps: vec![
                PathwayStep::new(1, "Gallbladder (distended/inflamed)", "digestive-gallbladder", "Distension or inflammation activates visceral nociceptors", "#27AE60", 2000),
                PathwayStep::new(2, "Greater splanchnic nerve", "nervous-splanchnic-nerves", "Afferent signals travel via splanchnic nerves", "#F39C12", 1500),
                PathwayStep::new(3, "Celiac plexus", "nervous-celiac-plexus", "Signals pass through celiac ganglion", "#F1C40F", 1500),
                PathwayStep::new(4, "Dorsal horn (T7-T9)", "nervous-spinal-cord", "Convergence with abdominal wall somatic afferents", "#2ECC71", 2000),
                PathwayStep::new(5, "Phrenic nerve (if diaphragm irritated)", "nervous-phrenic-nerve", "Inflammation spreading to diaphragm sends signals via C3-C5", "#3498DB", 1500),
                PathwayStep::new(6, "Shoulder (referred)", "musculoskeletal-shoulder", "Phrenic afferents cause shoulder tip pain", "#27AE60", 2000),
            ],
            total_duration: 10500,
            loopable: true,
        },
        clinical_characteristics: ClinicalFeatures {
            quality: strings(&["Colicky", "Cramping", "Steady ache"]),
            intensity: "Moderate to severe, often crescendo".into(),
            timing: "30 minutes to several hours, often postprandial".into(),
            aggravating_factors: strings(&["Fatty foods", "Large meals", "Night time"]),
            relieving_factors: strings(&["Vomiting (sometimes)", "Analgesics", "Stone passage"]),
            associated_symptoms: strings(&["Nausea", "Vomiting", "Fever (if cholecystitis)", "Jaundice (if CBD obstruction)"]),
            typical_patient: "Female, forties, fertile, family history (\"Four Fs\")".into(),
        },
        explanations: Explanations {
            level1: "When your gallbladder hurts, you might feel pain in your right shoulder or upper belly. The gallbladder shares nerve signals with these areas.".into(),
            level2: "Gallbladder pain is often felt in the upper right abdomen and can travel to the right shoulder blade area. This referred pain happens because the gallbladder and shoulder share some of the same nerve pathways.".into(),
            level3: "Biliary colic causes referred pain through two mechanisms: (1) T7-T9 dermatomal referral to the right upper quadrant and epigastrium, and (2) phrenic nerve referral to the right shoulder when inflammation irritates the diaphragm. This explains why cholecystitis often presents with shoulder tip pain.".into(),
            level4: "Gallbladder visceral afferents travel via the greater splanchnic nerve to the T7-T9 spinal segments, where they converge with somatic afferents from the abdominal wall. When inflammation extends to the parietal peritoneum or diaphragm, the phrenic nerve (C3-C5) carries additional signals that are referred to the shoulder tip (C4 dermatome). Murphy's sign tests for local peritoneal irritation.".into(),
            level5: "Biliary nociception involves mechanosensitive and chemosensitive afferents responding to gallbladder distension (>20 mmHg pressure) and inflammatory mediators. Visceral afferents course through the celiac plexus to enter the spinal cord via greater splanchnic nerve rami at T7-T9. Wide dynamic range neurons in lamina V receive convergent input from A-delta and C-fibers of both visceral and somatic origin. Diaphragmatic referral (Kehr's sign) occurs when inflammatory exudate or blood irritates the central diaphragm, stimulating phrenic afferents that share spinal segments with the C4 shoulder dermatome.".into(),
        },
    }
}

fn diaphragm() -> ReferredPainPattern {
    ReferredPainPattern {
        pattern_id: "diaphragm-referred-pain".into(),
        source_name: "Diaphragmatic Referred Pain (Kehr's Sign)".into(),
        source_organ: sources::diaphragm_central(),
        referral_regions: vec![
            ReferralRegion::new(ShoulderLeft, Classic, "Left shoulder tip pain (Kehr's sign - splenic injury)", "#9B59B6"),
            ReferralRegion::new(ShoulderRight, Classic, "Right shoulder tip pain (liver injury, subphrenic abscess)", "#9B59B6"),
            ReferralRegion::new(Neck, Common, "Neck and supraclavicular pain", "#8E44AD"),
        ],
        dermatomal_basis: levels(&[C3, C4, C5]),
        mechanism: Mechanism {
            theory: "Phrenic Nerve Referral".into(),
            convergence_point: "C3-C5 dorsal horn neurons".into(),
            somatic_dermatomes: levels(&[C3, C4, C5]),
            visceral_dermatomes: levels(&[C3, C4, C5]),
            central_misinterpretation: "Phrenic afferents from diaphragm share C3-C5 with shoulder and neck dermatomes".into(),
        },
        pathway: Pathway {
            steps: vec![
                PathwayStep::new(1, "Diaphragm (central tendon)", "respiratory-diaphragm", "Blood, pus, or air irritates the central diaphragm", "#9B59B6", 2000),
                PathwayStep::new(2, "Phrenic nerve", "nervous-phrenic-nerve", "Afferent signals travel via phrenic nerve", "#F39C12", 1500),
                PathwayStep::new(3, "Cervical spinal cord (C3-C5)", "nervous-spinal-cord", "Phrenic afferents enter dorsal horn at C3-C5", "#2ECC71", 1500),
                PathwayStep::new(4, "Dorsal horn convergence", "nervous-spinal-cord", "Convergence with shoulder dermatome afferents", "#3498DB", 2000),
                PathwayStep::new(5, "Shoulder (referred)", "musculoskeletal-shoulder", "Brain perceives pain at shoulder tip", "#9B59B6", 2000),
            ],
            total_duration: 9000,
            loopable: true,
        },
        clinical_characteristics: ClinicalFeatures {
            quality: strings(&["Sharp", "Aching", "Referred"]),
            intensity: "Variable, may be severe with acute injury".into(),
            timing: "Often worsens when lying flat (blood pools under diaphragm)".into(),
            aggravating_factors: strings(&["Supine position", "Deep inspiration", "Trendelenburg position"]),
            relieving_factors: strings(&["Sitting up", "Upright position"]),
            associated_symptoms: strings(&["Abdominal pain", "Signs of blood loss", "Fever (if abscess)"]),
            typical_patient: "Trauma patient, post-operative patient, or splenic pathology".into(),
        },
        explanations: Explanations {
            level1: "When something irritates the bottom of your lungs (the diaphragm), you might feel pain in your shoulder instead. This is because they share the same nerve.".into(),
            level2: "Kehr's sign is shoulder tip pain caused by irritation of the diaphragm muscle. The diaphragm and shoulder share the phrenic nerve, so your brain can get confused about where the pain is coming from. This can happen after an injury to organs near the diaphragm.".into(),
            level3: "The phrenic nerve (C3-C5) provides sensory innervation to the central diaphragm. When blood, pus, or air irritates this area, the brain often interprets the signal as originating from the shoulder (C4 dermatome). Kehr's sign - left shoulder pain worsening when supine - is a classic indicator of splenic rupture.".into(),
            level4: "Phrenic afferents carrying nociceptive information from the central diaphragm synapse in the C3-C5 dorsal horn, where they converge with somatic afferents from the shoulder and neck. This convergence-projection phenomenon causes shoulder tip pain when the diaphragm is irritated by hemoperitoneum (Kehr's sign), subphrenic abscess, or pneumoperitoneum. Right shoulder pain suggests right hemidiaphragm irritation (liver injury, subphrenic abscess).".into(),
            level5: "The embryological migration of the diaphragm from cervical somites (C3-C5) during development explains why its sensory innervation originates from the cervical plexus via the phrenic nerve rather than from segmentally adjacent thoracic nerves. Phrenic afferents are primarily C-fibers that respond to mechanical distension and chemical irritation. Central convergence with second-order neurons receiving A-delta input from the C4 dermatome (acromial region) results in the classic referral pattern. Positive Kehr's sign has high specificity (>90%) for hemoperitoneum but variable sensitivity depending on the volume of blood.".into(),
        },
    }
}

fn appendix() -> ReferredPainPattern {
    ReferredPainPattern {
        pattern_id: "appendix-referred-pain".into(),
        source_name: "Appendiceal Referred Pain".into(),
        source_organ: sources::appendix(),
        referral_regions: vec![
            ReferralRegion::new(Periumbilical, Classic, "Initial vague periumbilical pain (visceral)", "#E67E22"),
            ReferralRegion::new(RightLowerQuadrant, Classic, "Later localizes to RLQ (somatic - parietal peritoneum)", "#D35400"),
        ],
        dermatomal_basis: levels(&[T10]),
        mechanism: Mechanism {
            theory: "Visceral to Somatic Pain Migration".into(),
            convergence_point: "T10 dorsal horn initially, then local somatic afferents".into(),
            somatic_dermatomes: levels(&[T10, T11, T12]),
            visceral_dermatomes: levels(&[T10]),
            central_misinterpretation: "Early T10 visceral referral (umbilicus); inflammation involving parietal peritoneum causes localized RLQ somatic pain".into(),
        },
        pathway: Pathway {
            steps: vec![
                PathwayStep::new(1, "Appendix (obstructed/inflamed)", "digestive-appendix", "Obstruction causes distension and visceral pain", "#E67E22", 2000),
                PathwayStep::new(2, "Lesser splanchnic nerve", "nervous-splanchnic-nerves", "Visceral afferents travel to T10 segment", "#F39C12", 1500),
                PathwayStep::new(3, "Dorsal horn (T10)", "nervous-spinal-cord", "Convergence with umbilical dermatome afferents", "#2ECC71", 1500),
                PathwayStep::new(4, "Periumbilical region (referred)", "integumentary-abdomen", "Early vague pain around umbilicus", "#F1C40F", 2000),
                PathwayStep::new(5, "Parietal peritoneum (inflamed)", "digestive-peritoneum", "Inflammation spreads to involve somatic afferents", "#E74C3C", 1500),
                PathwayStep::new(6, "Right lower quadrant (somatic)", "integumentary-abdomen", "Pain localizes to RLQ at McBurney's point", "#D35400", 2000),
            ],
            total_duration: 10500,
            loopable: true,
        },
        clinical_characteristics: ClinicalFeatures {
            quality: strings(&["Vague", "Crampy (early)", "Sharp", "Well-localized (late)"]),
            intensity: "Mild to moderate initially, progressing to severe".into(),
            timing: "Classic sequence over 12-24 hours: periumbilical → RLQ".into(),
            aggravating_factors: strings(&["Movement", "Coughing", "Jarring"]),
            relieving_factors: strings(&["Lying still", "Flexing hip"]),
            associated_symptoms: strings(&["Anorexia", "Nausea", "Low-grade fever", "Rebound tenderness"]),
            typical_patient: "Young adult, peak age 10-30 years".into(),
        },
        explanations: Explanations {
            level1: "Appendix pain starts around your belly button and then moves to your lower right side. This happens because the pain signals take different paths as the problem gets worse.".into(),
            level2: "Early appendicitis causes vague pain around the belly button because the appendix sends signals to the same nerve level (T10) as the umbilicus. As inflammation spreads to the abdominal lining, the pain moves and becomes sharp in the right lower abdomen.".into(),
            level3: "The classic migration of appendicitis pain reflects two distinct pain pathways: (1) Initial visceral pain from appendiceal distension refers to the T10 dermatome (periumbilical), and (2) later somatic pain occurs when inflammation involves the parietal peritoneum, activating local somatic afferents that precisely localize to McBurney's point.".into(),
            level4: "Appendiceal visceral afferents travel with sympathetic fibers through the superior mesenteric plexus to enter the spinal cord at T10, causing referred periumbilical pain. This poorly localized pain reflects the sparse visceral representation in the somatosensory cortex. When transmural inflammation involves the parietal peritoneum, A-delta fibers carry sharp, well-localized somatic pain to the RLQ. This visceral-to-somatic progression is pathognomonic for appendicitis.".into(),
            level5: "Appendiceal obstruction (fecalith, lymphoid hyperplasia) increases intraluminal pressure, stimulating mechanosensitive visceral afferents that course with sympathetic fibers through the mesenteric plexus to T10 dorsal horn. Wide dynamic range neurons in lamina V receive convergent input from T10 dermatome, causing periumbilical referral. As bacterial proliferation and inflammatory mediators (IL-1, TNF-alpha, PGE2) cause transmural inflammation reaching the serosa, parietal peritoneal nociceptors (A-delta fibers from intercostal nerves T11-L1) provide precise somatotopic localization. Rovsing's sign, psoas sign, and obturator sign test for peritoneal irritation via muscle stretch.".into(),
        },
    }
}

fn renal_ureteral() -> ReferredPainPattern {
    ReferredPainPattern {
        pattern_id: "renal-ureteral-referred-pain".into(),
        source_name: "Renal/Ureteral Colic Referred Pain".into(),
        source_organ: sources::ureter(),
        referral_regions: vec![
            ReferralRegion::new(FlankLeft, Classic, "Flank pain (costovertebral angle)", "#3498DB"),
            ReferralRegion::new(FlankRight, Classic, "Flank pain (costovertebral angle)", "#3498DB"),
            ReferralRegion::new(GroinLeft, Classic, "Groin pain as stone descends", "#2980B9"),
            ReferralRegion::new(GroinRight, Classic, "Groin pain as stone descends", "#2980B9"),
        ],
        dermatomal_basis: levels(&[T10, T11, T12, L1, L2]),
        mechanism: Mechanism {
            theory: "Migratory Dermatomal Referral".into(),
            convergence_point: "T10-L2 dorsal horn, migrating as stone moves".into(),
            somatic_dermatomes: levels(&[T10, T11, T12, L1, L2]),
            visceral_dermatomes: levels(&[T10, T11, T12, L1, L2]),
            central_misinterpretation: "Ureteral pain follows a dermatomal pattern from flank to groin as the stone descends".into(),
        },
        pathway: Pathway {
            steps: vec![
                PathwayStep::new(1, "Renal pelvis/Ureter (obstructed)", "urinary-ureter", "Stone causes acute obstruction and ureteral spasm", "#3498DB", 2000),
                PathwayStep::new(2, "Renal plexus afferents", "nervous-renal-plexus", "Visceral afferents activated by distension", "#F39C12", 1500),
                PathwayStep::new(3, "Dorsal horn (T10-L2)", "nervous-spinal-cord", "Signals enter at multiple spinal levels", "#2ECC71", 1500),
                PathwayStep::new(4, "Flank (referred - upper ureter)", "integumentary-flank", "T10-T11 referral causes CVA tenderness", "#3498DB", 2000),
                PathwayStep::new(5, "Lower abdomen (mid-ureter)", "integumentary-abdomen", "T12-L1 referral as stone descends", "#2980B9", 1500),
                PathwayStep::new(6, "Groin/genitalia (referred - lower ureter)", "integumentary-groin", "L1-L2 referral to groin, labia/testicle", "#1E3A5F", 2000),
            ],
            total_duration: 10500,
            loopable: true,
        },
        clinical_characteristics: ClinicalFeatures {
            quality: strings(&["Colicky", "Severe", "Cramping", "Waves of pain"]),
            intensity: "Often described as the worst pain ever experienced".into(),
            timing: "Comes in waves lasting 20-60 minutes".into(),
            aggravating_factors: strings(&["Fluid intake", "Activity"]),
            relieving_factors: strings(&["NSAIDs", "Opioids", "Stone passage"]),
            associated_symptoms: strings(&["Hematuria", "Nausea", "Vomiting", "Urinary urgency"]),
            typical_patient: "Middle-aged male, often with dehydration or dietary risk factors".into(),
        },
        explanations: Explanations {
            level1: "Kidney stone pain starts in your back and moves down to your belly and groin area as the stone travels down. This is one of the most painful things you can experience.".into(),
            level2: "Renal colic pain follows the path of the ureter from the back (flank) to the front (groin). As the kidney stone moves down, the pain migrates too, because different sections of the ureter connect to different nerve levels.".into(),
            level3: "Ureteral colic produces referred pain that migrates with the stone: renal pelvis obstruction causes flank pain (T10-T11), mid-ureter obstruction causes lateral abdominal pain (T12), and lower ureter/UV junction obstruction causes groin and genital pain (L1-L2). This dermatomal migration pattern helps localize the stone.".into(),
            level4: "Acute ureteral obstruction causes violent smooth muscle spasm and elevated intraluminal pressure, stimulating mechanosensitive and stretch-activated nociceptors. Afferents travel via the renal and ureteric plexuses to enter the spinal cord at T10-L2. The sequential dermatomal referral pattern (flank → abdomen → groin) correlates with stone position. Genitofemoral nerve (L1-L2) involvement causes testicular or labial pain. The intensity reflects the lack of central inhibition of visceral pain signals.".into(),
            level5: "Ureteral obstruction generates intraluminal pressures up to 70 mmHg, activating high-threshold mechanosensitive afferents including TRPV1 and ASIC channels in ureteral mucosa. Visceral afferents course through the inferior hypogastric plexus to reach dorsal horn laminae I and V at T10-L2 in a somatotopic pattern: proximal ureter (T10-T11), mid-ureter (T12-L1), distal ureter and UVJ (L1-L2). The genital referral occurs via convergence with genitofemoral nerve afferents. Prostaglandin release (PGE2, PGF2α) sensitizes nociceptors, explaining NSAID efficacy. Stone-induced inflammation also activates C-fiber polymodal nociceptors, contributing to the severe pain intensity.".into(),
        },
    }
}

fn pancreatic() -> ReferredPainPattern {
    ReferredPainPattern {
        pattern_id: "pancreatic-referred-pain".into(),
        source_name: "Pancreatic Referred Pain".into(),
        source_organ: sources::pancreas(),
        referral_regions: vec![
            ReferralRegion::new(Epigastrium, Classic, "Epigastric pain, often severe", "#8E44AD"),
            ReferralRegion::new(BackMid, Classic, "Pain radiating to the back (T10-T12)", "#9B59B6"),
            ReferralRegion::new(LeftUpperQuadrant, Common, "Left upper quadrant involvement (tail of pancreas)", "#8E44AD"),
        ],
        dermatomal_basis: levels(&[T5, T6, T7, T8, T9, T10]),
        mechanism: Mechanism {
            theory: "Retroperitoneal Referral Pattern".into(),
            convergence_point: "T5-T10 dorsal horn via splanchnic nerves".into(),
            somatic_dermatomes: levels(&[T5, T6, T7, T8, T9, T10]),
            visceral_dermatomes: levels(&[T5, T6, T7, T8, T9]),
            central_misinterpretation: "Retroperitoneal location causes posterior referral; wide innervation causes band-like epigastric pain".into(),
        },
        pathway: Pathway {
            steps: vec![
                PathwayStep::new(1, "Pancreas (inflamed)", "digestive-pancreas", "Autodigestion causes intense visceral pain", "#8E44AD", 2000),
                PathwayStep::new(2, "Splanchnic nerves (greater & lesser)", "nervous-splanchnic-nerves", "Afferents travel via celiac plexus", "#F39C12", 1500),
                PathwayStep::new(3, "Celiac plexus", "nervous-celiac-plexus", "Major relay point for pancreatic pain", "#F1C40F", 1500),
                PathwayStep::new(4, "Dorsal horn (T5-T10)", "nervous-spinal-cord", "Convergence with epigastric and back dermatomes", "#2ECC71", 2000),
                PathwayStep::new(5, "Epigastrium (referred)", "integumentary-abdomen", "Anterior referred pain in epigastric region", "#8E44AD", 1500),
                PathwayStep::new(6, "Back (referred)", "musculoskeletal-spine", "Posterior referral due to retroperitoneal location", "#9B59B6", 2000),
            ],
            total_duration: 10500,
            loopable: true,
        },
        clinical_characteristics: ClinicalFeatures {
            quality: strings(&["Boring", "Constant", "Severe", "Penetrating"]),
            intensity: "Often excruciating, 10/10 on pain scale".into(),
            timing: "Constant, may last days; worse after eating".into(),
            aggravating_factors: strings(&["Eating", "Alcohol", "Lying supine"]),
            relieving_factors: strings(&["Leaning forward", "Fetal position", "NPO status"]),
            associated_symptoms: strings(&["Nausea", "Vomiting", "Fever", "Ileus", "Hypotension"]),
            typical_patient: "Patient with gallstones or heavy alcohol use".into(),
        },
        explanations: Explanations {
            level1: "Pancreas pain is felt in your upper belly and also in your back. Bending forward often helps because it takes pressure off the pancreas.".into(),
            level2: "Pancreatitis causes severe pain in the upper abdomen that goes straight through to the back. The pancreas sits behind the stomach near the spine, so its pain often radiates posteriorly. Leaning forward can provide some relief.".into(),
            level3: "Pancreatic pain characteristically radiates to the back due to the retroperitoneal position of the pancreas. Visceral afferents travel via the splanchnic nerves to T5-T10, producing a band-like pattern of epigastric pain with posterior penetration. Relief with forward leaning (knee-chest position) occurs because it decreases tension on the retroperitoneal tissues.".into(),
            level4: "The pancreas receives dense sensory innervation via the celiac plexus from both greater and lesser splanchnic nerves (T5-T10). In acute pancreatitis, autodigestion and inflammatory mediators intensely stimulate visceral nociceptors. The retroperitoneal location means afferent signals enter posterior spinal segments, causing the characteristic band-like radiation to the back. Celiac plexus block can provide palliative analgesia in chronic pancreatitis and pancreatic cancer.".into(),
            level5: "Pancreatic nociception involves multiple inflammatory pathways: trypsin activation releases bradykinin and substance P; acinar cell necrosis releases ATP activating P2X purinergic receptors; ischemia from microvascular thrombosis stimulates TRPV1 channels. Visceral afferents (predominantly C-fibers) course through the celiac plexus, which contains ~50,000 neurons receiving convergent input from upper abdominal viscera. The T5-T10 dermatomal distribution creates the epigastric-to-back referral pattern. Chronic pancreatitis leads to neuroplastic changes including increased density of nociceptive fibers and central sensitization, explaining persistent pain even after inflammation resolves.".into(),
        },
    }
}
