use super::{PlanVariant, Scenario};

pub const SAFETY_DISCLAIMER: &str = "PetCoach offers general puppy-care guidance, not veterinary advice. \
If your puppy seems unwell, injured, or in distress, contact your veterinarian right away.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdviceBundle {
    pub action: &'static str,
    pub reason: &'static str,
    pub what_to_avoid: &'static str,
    pub reassurance: &'static str,
    pub next_check_in_minutes: u32,
}

struct ScenarioPlaybook {
    plan_a: AdviceBundle,
    plan_b: AdviceBundle,
}

pub fn advice_for(scenario: Scenario, plan: PlanVariant) -> &'static AdviceBundle {
    let playbook = playbook_for(scenario);
    match plan {
        PlanVariant::A => &playbook.plan_a,
        PlanVariant::B => &playbook.plan_b,
    }
}

fn playbook_for(scenario: Scenario) -> &'static ScenarioPlaybook {
    match scenario {
        Scenario::OwnerOverwhelmed => &OWNER_OVERWHELMED,
        Scenario::HealthConcern => &HEALTH_CONCERN,
        Scenario::Overtired => &OVERTIRED,
        Scenario::Potty => &POTTY,
        Scenario::CrateDistress => &CRATE_DISTRESS,
        Scenario::Biting => &BITING,
        Scenario::Barking => &BARKING,
        Scenario::MealTime => &MEAL_TIME,
        Scenario::SleepTime => &SLEEP_TIME,
        Scenario::PlayTime => &PLAY_TIME,
    }
}

static OWNER_OVERWHELMED: ScenarioPlaybook = ScenarioPlaybook {
    plan_a: AdviceBundle {
        action: "Pause for five minutes: settle your puppy somewhere safe with a chew, then take a breather yourself.",
        reason: "A calm caregiver helps a puppy calm down; a short reset is better for both of you than pushing on.",
        what_to_avoid: "Avoid scolding or starting a new training exercise while you feel stretched thin.",
        reassurance: "Feeling overwhelmed is common with a young puppy. It does not mean you are doing it wrong.",
        next_check_in_minutes: 20,
    },
    plan_b: AdviceBundle {
        action: "Ask someone to take over for a bit, or pick one simple routine for the next hour (Plan B). \
We're trying a different approach to lighten the load.",
        reason: "Sharing the work or shrinking the to-do list lowers pressure without dropping the basics.",
        what_to_avoid: "Avoid trying to fix every behavior at once today.",
        reassurance: "Small, steady routines add up. You can come back to the harder things later.",
        next_check_in_minutes: 30,
    },
};

static HEALTH_CONCERN: ScenarioPlaybook = ScenarioPlaybook {
    plan_a: AdviceBundle {
        action: "Pause training and assess your puppy: check breathing, gums, energy and what came out, then call your vet if anything looks off.",
        reason: "Vomiting, diarrhea, bleeding, injuries, seizures or possible poisoning can need prompt professional care.",
        what_to_avoid: "Avoid giving human medication or inducing vomiting unless a vet tells you to.",
        reassurance: "Checking in early is the right call. Many tummy upsets are minor, and your vet can help you decide.",
        next_check_in_minutes: 15,
    },
    plan_b: AdviceBundle {
        action: "Keep your puppy quiet and watched, note the time and details of each symptom, and contact your vet or an emergency clinic (Plan B). \
We're trying a different approach since this came up again.",
        reason: "A symptom that keeps coming back is worth a professional opinion, and notes make that call faster.",
        what_to_avoid: "Avoid waiting it out if symptoms repeat, worsen, or your puppy seems weak.",
        reassurance: "You are paying close attention, which is exactly what your puppy needs right now.",
        next_check_in_minutes: 15,
    },
};

static OVERTIRED: ScenarioPlaybook = ScenarioPlaybook {
    plan_a: AdviceBundle {
        action: "Guide your puppy to their sleep spot: dim the lights and offer a quiet chew so they can fall asleep.",
        reason: "Young puppies get cranky and bitey when they are overtired late in the day; they need help switching off.",
        what_to_avoid: "Avoid more play or excitement, which makes an overtired puppy more wound up.",
        reassurance: "Evening zoomies and nipping are normal signs of a tired puppy, not bad behavior.",
        next_check_in_minutes: 30,
    },
    plan_b: AdviceBundle {
        action: "Try a short, calm crate or pen rest with a covered side and soft white noise to encourage sleep (Plan B). \
We're trying a different approach to help them settle.",
        reason: "Less visual input and a steady sound make it easier for a wired puppy to let go and sleep.",
        what_to_avoid: "Avoid letting them out the moment they fuss; wait for a short pause in the noise.",
        reassurance: "Settling takes practice. Each calm evening makes the next one easier.",
        next_check_in_minutes: 30,
    },
};

static POTTY: ScenarioPlaybook = ScenarioPlaybook {
    plan_a: AdviceBundle {
        action: "Take your puppy outside for a potty break.",
        reason: "Young puppies need frequent potty breaks, especially every 1-2 hours.",
        what_to_avoid: "Avoid playing on the way out; keep it boring until they go.",
        reassurance: "Accidents are part of learning. Frequent trips outside build the habit fast.",
        next_check_in_minutes: 30,
    },
    plan_b: AdviceBundle {
        action: "Try a different potty spot or a short leash walk outside (Plan B). \
We're trying a different approach to see if it helps.",
        reason: "A change of scenery can help a puppy relax and go potty.",
        what_to_avoid: "Avoid punishing accidents indoors; just clean them up with an enzyme cleaner.",
        reassurance: "Some puppies take longer to go in a new place. Patience pays off here.",
        next_check_in_minutes: 30,
    },
};

static CRATE_DISTRESS: ScenarioPlaybook = ScenarioPlaybook {
    plan_a: AdviceBundle {
        action: "Check basic needs first (potty, water, comfort), then sit calmly near the crate until your puppy quiets.",
        reason: "Crying in the crate usually means a need or loneliness; meeting needs and staying close builds trust.",
        what_to_avoid: "Avoid opening the crate mid-cry or using it as a punishment.",
        reassurance: "Most puppies learn to love their crate within a few weeks of calm practice.",
        next_check_in_minutes: 15,
    },
    plan_b: AdviceBundle {
        action: "Move the crate closer to where you sleep and add a worn t-shirt or a snuffle toy (Plan B). \
We're trying a different approach to make the crate feel safer.",
        reason: "Your scent and proximity can soothe a puppy that feels isolated.",
        what_to_avoid: "Avoid long crate stretches during the day while they are still learning.",
        reassurance: "A little crying is normal early on. Steady routines make it fade.",
        next_check_in_minutes: 15,
    },
};

static BITING: ScenarioPlaybook = ScenarioPlaybook {
    plan_a: AdviceBundle {
        action: "Redirect the biting onto a chew toy, and calmly pause play for a few seconds if teeth land on skin.",
        reason: "Puppies explore with their mouths, especially while teething; redirection teaches what is okay to bite.",
        what_to_avoid: "Avoid yelling, hand-waving or rough play that turns biting into a game.",
        reassurance: "Mouthiness peaks in young puppies and fades with consistent redirection.",
        next_check_in_minutes: 20,
    },
    plan_b: AdviceBundle {
        action: "Offer a frozen chew or a lick mat, then give a short nap break if the nipping continues (Plan B). \
We're trying a different approach to soothe the teething.",
        reason: "Cold soothes sore gums, and persistent nipping is often a sign a puppy needs rest.",
        what_to_avoid: "Avoid letting children chase or wrestle while the puppy is mouthy.",
        reassurance: "You are teaching bite inhibition, one calm repetition at a time.",
        next_check_in_minutes: 20,
    },
};

static BARKING: ScenarioPlaybook = ScenarioPlaybook {
    plan_a: AdviceBundle {
        action: "Wait for a brief moment of quiet, then reward it, and check whether something specific is triggering the barking.",
        reason: "Rewarding quiet teaches the behavior you want; finding the trigger tells you what need to meet.",
        what_to_avoid: "Avoid shouting back, which can sound like you are joining in.",
        reassurance: "Barking is communication. Once you know the trigger, it gets much easier to manage.",
        next_check_in_minutes: 20,
    },
    plan_b: AdviceBundle {
        action: "Block the view or sound that sets off the barking and give a sniffing game to focus on (Plan B). \
We're trying a different approach to lower the trigger.",
        reason: "Removing the trigger and giving the nose a job reduces arousal quickly.",
        what_to_avoid: "Avoid long periods alone near windows or doors while this is being worked on.",
        reassurance: "With fewer triggers and more rewards for quiet, barking usually drops off.",
        next_check_in_minutes: 20,
    },
};

static MEAL_TIME: ScenarioPlaybook = ScenarioPlaybook {
    plan_a: AdviceBundle {
        action: "Offer a meal or snack.",
        reason: "Puppies typically need meals every 4-6 hours during the day.",
        what_to_avoid: "Avoid vigorous play right after eating.",
        reassurance: "Regular mealtimes also make potty timing more predictable.",
        next_check_in_minutes: 60,
    },
    plan_b: AdviceBundle {
        action: "Offer a small portion or use a puzzle feeder (Plan B). \
We're trying a different approach to keep things engaging.",
        reason: "A lighter or interactive meal can be easier if appetite is low.",
        what_to_avoid: "Avoid swapping foods abruptly if they skip a meal.",
        reassurance: "Appetite varies day to day. One lighter meal is rarely a concern.",
        next_check_in_minutes: 60,
    },
};

static SLEEP_TIME: ScenarioPlaybook = ScenarioPlaybook {
    plan_a: AdviceBundle {
        action: "Settle your puppy for sleep in their crate.",
        reason: "Nighttime is for rest; keep stimulation low and lights dim.",
        what_to_avoid: "Avoid bright lights and play during night wake-ups.",
        reassurance: "Puppies sleep up to 18-20 hours a day. Rest is part of healthy growth.",
        next_check_in_minutes: 120,
    },
    plan_b: AdviceBundle {
        action: "Dim the room and add a soft white-noise cue to help them sleep (Plan B). \
We're trying a different approach to encourage settling.",
        reason: "Consistent cues can help a puppy wind down at night.",
        what_to_avoid: "Avoid long conversations or cuddles that wake them up again.",
        reassurance: "Night routines take a little while to stick. You are on the right track.",
        next_check_in_minutes: 120,
    },
};

static PLAY_TIME: ScenarioPlaybook = ScenarioPlaybook {
    plan_a: AdviceBundle {
        action: "Provide a short play or training session.",
        reason: "If basic needs are met, a brief activity helps with bonding and learning.",
        what_to_avoid: "Avoid sessions longer than 10-15 minutes; young puppies tire quickly.",
        reassurance: "Short, happy sessions teach more than long ones.",
        next_check_in_minutes: 45,
    },
    plan_b: AdviceBundle {
        action: "Swap in a calm enrichment play game like a sniff-and-find (Plan B). \
We're trying a different approach for variety.",
        reason: "Low-key enrichment still builds skills without over-stimulation.",
        what_to_avoid: "Avoid repeating the same game until they lose interest.",
        reassurance: "Variety keeps learning fun for both of you.",
        next_check_in_minutes: 45,
    },
};
