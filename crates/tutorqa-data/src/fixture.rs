use tutorqa_core::AnswerStep;
use tutorqa_core::Attachment;
use tutorqa_core::AttachmentKind;
use tutorqa_core::Channel;
use tutorqa_core::ChannelId;
use tutorqa_core::Thread;
use tutorqa_core::ThreadBucket;
use tutorqa_core::ThreadDetail;
use tutorqa_core::ThreadId;
use tutorqa_core::ThreadRepository;

use crate::document::DatasetDocument;

const MINUTE: u64 = 60 * 1_000;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

struct SeedChannel {
    id: &'static str,
    name: &'static str,
    subject: &'static str,
    students: u32,
}

struct SeedThread {
    id: &'static str,
    title: &'static str,
    tags: &'static [&'static str],
    author: &'static str,
    age_ms: u64,
    preview: &'static str,
    solved: bool,
    reactions: u32,
    pinned: bool,
}

struct SeedDetail {
    thread: &'static str,
    body: &'static str,
    attachments: &'static [(AttachmentKind, &'static str)],
    steps: &'static [(&'static str, &'static str)],
    final_answer: &'static str,
}

// c3 ships without a bucket; browsing it shows the empty fallback.
const CHANNELS: [SeedChannel; 3] = [
    SeedChannel {
        id: "c1",
        name: "Calculus I",
        subject: "Mathematics",
        students: 128,
    },
    SeedChannel {
        id: "c2",
        name: "Physics Mechanics",
        subject: "Physics",
        students: 97,
    },
    SeedChannel {
        id: "c3",
        name: "Linear Algebra",
        subject: "Mathematics",
        students: 64,
    },
];

const CALCULUS_PINNED: [SeedThread; 1] = [SeedThread {
    id: "p1",
    title: "Week 3 problem set walkthrough",
    tags: &["calc", "homework"],
    author: "Dr. Ellis",
    age_ms: 3 * DAY,
    preview: "Worked solutions for every question on this week's set.",
    solved: true,
    reactions: 21,
    pinned: true,
}];

const CALCULUS_RECENT: [SeedThread; 4] = [
    SeedThread {
        id: "r1",
        title: "Derivatives",
        tags: &["calc"],
        author: "Maya R.",
        age_ms: 2 * HOUR,
        preview: "Why does the power rule work for negative exponents?",
        solved: false,
        reactions: 3,
        pinned: false,
    },
    SeedThread {
        id: "r2",
        title: "Limits intro",
        tags: &["calc", "intro"],
        author: "Sam T.",
        age_ms: 5 * HOUR,
        preview: "How do I tell one-sided limits apart on a graph?",
        solved: true,
        reactions: 7,
        pinned: false,
    },
    SeedThread {
        id: "r3",
        title: "Chain rule confusion",
        tags: &["calc", "homework"],
        author: "Priya K.",
        age_ms: DAY + 2 * HOUR,
        preview: "Which function is the inside one in exercise 4b?",
        solved: false,
        reactions: 5,
        pinned: false,
    },
    SeedThread {
        id: "r4",
        title: "u-substitution practice",
        tags: &["calc", "integration"],
        author: "Leo M.",
        age_ms: 2 * DAY,
        preview: "Picked the wrong u again. How do you choose?",
        solved: true,
        reactions: 9,
        pinned: false,
    },
];

const MECHANICS_RECENT: [SeedThread; 2] = [
    SeedThread {
        id: "m1",
        title: "Friction on inclined planes",
        tags: &["forces"],
        author: "Ana B.",
        age_ms: 90 * MINUTE,
        preview: "Does static friction point up or down the slope here?",
        solved: false,
        reactions: 4,
        pinned: false,
    },
    SeedThread {
        id: "m2",
        title: "Projectile range derivation",
        tags: &["kinematics"],
        author: "Owen D.",
        age_ms: 8 * HOUR,
        preview: "Lost the plot between equations 3 and 4.",
        solved: true,
        reactions: 11,
        pinned: false,
    },
];

const DETAILS: [SeedDetail; 7] = [
    SeedDetail {
        thread: "p1",
        body: "Worked solutions for questions 1 through 8. Post follow-ups \
               under the matching step number so answers stay threaded.",
        attachments: &[(AttachmentKind::Pdf, "week-3-problem-set.pdf")],
        steps: &[
            (
                "Read the problem aloud",
                "Half the set is misread rates versus totals. Say what the \
                 quantity measures before touching algebra.",
            ),
            (
                "Name the rule before using it",
                "Each question needs exactly one of: power rule, product \
                 rule, chain rule. Write the name down first.",
            ),
            (
                "Check units and signs",
                "A decreasing quantity must come out negative. Three of the \
                 eight answers are sign traps.",
            ),
        ],
        final_answer: "Full walkthrough attached; every question maps to one \
                       named rule plus a sign check.",
    },
    SeedDetail {
        thread: "r1",
        body: "The textbook proves the power rule for positive integers and \
               then quietly uses it for x^(-2). Why is that allowed?",
        attachments: &[(AttachmentKind::Image, "notebook-page.jpg")],
        steps: &[
            (
                "Rewrite the negative exponent",
                "x^(-2) is 1/x^2, so differentiate it as a quotient once to \
                 see the pattern the rule predicts.",
            ),
            (
                "Compare with the rule's output",
                "The quotient computation gives -2x^(-3), exactly what the \
                 power rule claims. The rule extends, it does not break.",
            ),
        ],
        final_answer: "The power rule holds for every rational exponent; the \
                       negative case follows from the quotient rule.",
    },
    SeedDetail {
        thread: "r2",
        body: "On the graph from lecture 4 the function jumps at x = 1. \
               Which side does each one-sided limit read from?",
        attachments: &[],
        steps: &[
            (
                "Trace from the left",
                "Follow the curve approaching x = 1 with x < 1. The height \
                 you land on is the left-hand limit.",
            ),
            (
                "Trace from the right",
                "Repeat from x > 1. If the two heights differ, the two-sided \
                 limit does not exist.",
            ),
        ],
        final_answer: "Left limit is 2, right limit is 3, so the two-sided \
                       limit at x = 1 does not exist.",
    },
    SeedDetail {
        thread: "r3",
        body: "Exercise 4b is sin(3x^2 + 1). I keep differentiating the \
               outside and the inside in the wrong order.",
        attachments: &[(AttachmentKind::Image, "exercise-4b.png")],
        steps: &[
            (
                "Box the inside function",
                "Everything the outer function swallows is inside. Here the \
                 box holds 3x^2 + 1.",
            ),
            (
                "Differentiate outside, keep the box",
                "cos(3x^2 + 1) first, untouched box, then multiply by the \
                 box's own derivative 6x.",
            ),
        ],
        final_answer: "d/dx sin(3x^2 + 1) = 6x cos(3x^2 + 1).",
    },
    SeedDetail {
        thread: "r4",
        body: "For the integral of x cos(x^2) dx I tried u = cos(x^2) and it \
               got worse. How do you pick u on the first try?",
        attachments: &[],
        steps: &[
            (
                "Look for a derivative pair",
                "Pick u so that du already sits in the integrand. Here \
                 u = x^2 gives du = 2x dx, and the x is right there.",
            ),
            (
                "Substitute and simplify",
                "The integral becomes cos(u) du / 2, which is elementary.",
            ),
            (
                "Substitute back",
                "Finish with sin(x^2) / 2 + C and differentiate once to \
                 confirm.",
            ),
        ],
        final_answer: "u = x^2; the answer is sin(x^2) / 2 + C.",
    },
    SeedDetail {
        thread: "m1",
        body: "Block resting on a 20 degree incline, nothing moving. The \
               diagram in my notes has friction pointing both ways.",
        attachments: &[(AttachmentKind::Pdf, "free-body-diagrams.pdf")],
        steps: &[
            (
                "Ask what motion would happen without friction",
                "Gravity alone would slide the block down the slope.",
            ),
            (
                "Point friction against that motion",
                "Static friction opposes the impending slide, so it points up \
                 the slope here.",
            ),
        ],
        final_answer: "Up the slope, with magnitude mg sin(20 deg) while the \
                       block stays put.",
    },
    SeedDetail {
        thread: "m2",
        body: "The range derivation in lecture 9 goes from t_flight to R in \
               one line. Equations 3 to 4 skip the substitution.",
        attachments: &[],
        steps: &[
            (
                "Write the flight time explicitly",
                "From the vertical equation, t_flight = 2 v0 sin(theta) / g.",
            ),
            (
                "Substitute into the horizontal equation",
                "R = v0 cos(theta) t_flight, then apply the double-angle \
                 identity to get v0^2 sin(2 theta) / g.",
            ),
        ],
        final_answer: "R = v0^2 sin(2 theta) / g; the skipped line is the \
                       flight-time substitution plus the double angle.",
    },
];

/// Bundled demo dataset: two populated channels, one bucketless channel,
/// a pinned walkthrough, and a detail for every listed thread. Timestamps
/// are seeded relative to the current clock so age labels stay fresh.
pub fn demo_dataset() -> DatasetDocument {
    let now = now_ms();
    let mut doc = DatasetDocument {
        channels: CHANNELS.iter().map(hydrate_channel).collect(),
        ..DatasetDocument::default()
    };

    doc.threads.insert(
        ChannelId("c1".to_string()),
        ThreadBucket {
            pinned: CALCULUS_PINNED
                .iter()
                .map(|seed| hydrate_thread(seed, now))
                .collect(),
            recent: CALCULUS_RECENT
                .iter()
                .map(|seed| hydrate_thread(seed, now))
                .collect(),
        },
    );
    doc.threads.insert(
        ChannelId("c2".to_string()),
        ThreadBucket {
            pinned: Vec::new(),
            recent: MECHANICS_RECENT
                .iter()
                .map(|seed| hydrate_thread(seed, now))
                .collect(),
        },
    );

    let seeds = CALCULUS_PINNED
        .iter()
        .chain(CALCULUS_RECENT.iter())
        .chain(MECHANICS_RECENT.iter());
    for seed in seeds {
        if let Some(detail) = hydrate_detail(seed, now) {
            doc.details.insert(ThreadId(seed.id.to_string()), detail);
        }
    }
    doc
}

pub fn demo_repository() -> ThreadRepository {
    demo_dataset().into_repository()
}

fn now_ms() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}

fn hydrate_channel(seed: &SeedChannel) -> Channel {
    Channel {
        id: ChannelId(seed.id.to_string()),
        name: seed.name.to_string(),
        subject: seed.subject.to_string(),
        students_count: seed.students,
    }
}

fn hydrate_thread(seed: &SeedThread, now: u64) -> Thread {
    Thread {
        id: ThreadId(seed.id.to_string()),
        title: seed.title.to_string(),
        tags: seed.tags.iter().map(|tag| tag.to_string()).collect(),
        author: seed.author.to_string(),
        created_at_ms: now.saturating_sub(seed.age_ms),
        preview: seed.preview.to_string(),
        solved: seed.solved,
        reactions: seed.reactions,
        pinned: seed.pinned,
    }
}

fn hydrate_detail(summary_seed: &SeedThread, now: u64) -> Option<ThreadDetail> {
    let seed = DETAILS.iter().find(|seed| seed.thread == summary_seed.id)?;
    Some(ThreadDetail {
        summary: hydrate_thread(summary_seed, now),
        body: seed.body.to_string(),
        attachments: seed
            .attachments
            .iter()
            .map(|(kind, name)| Attachment {
                kind: *kind,
                name: name.to_string(),
            })
            .collect(),
        steps: seed
            .steps
            .iter()
            .map(|(title, text)| AnswerStep {
                title: title.to_string(),
                text: text.to_string(),
            })
            .collect(),
        final_answer: seed.final_answer.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::demo_dataset;
    use super::demo_repository;
    use super::now_ms;
    use super::DAY;
    use pretty_assertions::assert_eq;
    use tutorqa_core::ChannelId;
    use tutorqa_core::ThreadId;

    #[test]
    fn demo_dataset_passes_the_integrity_audit() {
        let repo = demo_repository();
        let issues = repo.audit();
        assert_eq!(issues, vec![]);
    }

    #[test]
    fn linear_algebra_ships_without_a_bucket() {
        let repo = demo_repository();
        assert!(repo.channel(&ChannelId("c3".to_string())).is_some());
        assert!(repo.bucket_for(&ChannelId("c3".to_string())).is_empty());
    }

    #[test]
    fn seeded_timestamps_sit_in_the_recent_past() {
        let doc = demo_dataset();
        let now = now_ms();
        for bucket in doc.threads.values() {
            for thread in bucket.pinned.iter().chain(bucket.recent.iter()) {
                assert!(thread.created_at_ms <= now, "{} is in the future", thread.id);
                assert!(
                    now - thread.created_at_ms < 30 * DAY,
                    "{} is implausibly old",
                    thread.id
                );
            }
        }
    }

    #[test]
    fn pinned_walkthrough_carries_steps_and_an_attachment() {
        let repo = demo_repository();
        let detail = repo
            .detail_for(&ThreadId("p1".to_string()))
            .expect("pinned detail");
        assert!(detail.summary.pinned);
        assert_eq!(detail.steps.len(), 3);
        assert_eq!(detail.attachments[0].name, "week-3-problem-set.pdf");
    }

    #[test]
    fn demo_dataset_serializes_in_the_wire_shape() {
        let json = serde_json::to_value(demo_dataset()).expect("serialize");
        assert_eq!(json["channels"][0]["studentsCount"], 128);
        let final_answer = json["details"]["p1"]["final"].as_str().expect("final text");
        assert!(final_answer.contains("walkthrough"));
        assert_eq!(json["details"]["p1"]["attachments"][0]["type"], "pdf");
    }
}
