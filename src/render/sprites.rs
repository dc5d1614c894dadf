//! ASCII sprite table for the terminal front end
//!
//! Frames are looked up by (species, stage, mode). The simulation only
//! hands out those keys; everything drawn lives here.

use crate::core::types::{Species, Stage};
use crate::entity::state::VisualMode;

/// All frames for one (species, stage, mode) key
pub fn frames(species: Species, stage: Stage, mode: VisualMode) -> &'static [&'static str] {
    use Species::*;
    use Stage::*;
    use VisualMode::*;

    match (species, stage, mode) {
        (Cat, Baby, Idle) => CAT_BABY_IDLE,
        (Cat, Baby, Eat) => CAT_BABY_EAT,
        (Cat, Baby, Sleep) => CAT_BABY_SLEEP,
        (Cat, Baby, Play) => CAT_BABY_PLAY,
        (Cat, Baby, Hungry) => CAT_BABY_HUNGRY,
        (Cat, Baby, Tired) => CAT_BABY_TIRED,
        (Cat, Baby, Bored) => CAT_BABY_BORED,
        (Cat, Baby, Dead) => CAT_BABY_DEAD,
        (Cat, Adult, Idle) => CAT_ADULT_IDLE,
        (Cat, Adult, Eat) => CAT_ADULT_EAT,
        (Cat, Adult, Sleep) => CAT_ADULT_SLEEP,
        (Cat, Adult, Play) => CAT_ADULT_PLAY,
        (Cat, Adult, Hungry) => CAT_ADULT_HUNGRY,
        (Cat, Adult, Tired) => CAT_ADULT_TIRED,
        (Cat, Adult, Bored) => CAT_ADULT_BORED,
        (Cat, Adult, Dead) => CAT_ADULT_DEAD,
        (Dog, Baby, Idle) => DOG_BABY_IDLE,
        (Dog, Baby, Eat) => DOG_BABY_EAT,
        (Dog, Baby, Sleep) => DOG_BABY_SLEEP,
        (Dog, Baby, Play) => DOG_BABY_PLAY,
        (Dog, Baby, Hungry) => DOG_BABY_HUNGRY,
        (Dog, Baby, Tired) => DOG_BABY_TIRED,
        (Dog, Baby, Bored) => DOG_BABY_BORED,
        (Dog, Baby, Dead) => DOG_BABY_DEAD,
        (Dog, Adult, Idle) => DOG_ADULT_IDLE,
        (Dog, Adult, Eat) => DOG_ADULT_EAT,
        (Dog, Adult, Sleep) => DOG_ADULT_SLEEP,
        (Dog, Adult, Play) => DOG_ADULT_PLAY,
        (Dog, Adult, Hungry) => DOG_ADULT_HUNGRY,
        (Dog, Adult, Tired) => DOG_ADULT_TIRED,
        (Dog, Adult, Bored) => DOG_ADULT_BORED,
        (Dog, Adult, Dead) => DOG_ADULT_DEAD,
        (Dragon, Baby, Idle) => DRAGON_BABY_IDLE,
        (Dragon, Baby, Eat) => DRAGON_BABY_EAT,
        (Dragon, Baby, Sleep) => DRAGON_BABY_SLEEP,
        (Dragon, Baby, Play) => DRAGON_BABY_PLAY,
        (Dragon, Baby, Hungry) => DRAGON_BABY_HUNGRY,
        (Dragon, Baby, Tired) => DRAGON_BABY_TIRED,
        (Dragon, Baby, Bored) => DRAGON_BABY_BORED,
        (Dragon, Baby, Dead) => DRAGON_BABY_DEAD,
        (Dragon, Adult, Idle) => DRAGON_ADULT_IDLE,
        (Dragon, Adult, Eat) => DRAGON_ADULT_EAT,
        (Dragon, Adult, Sleep) => DRAGON_ADULT_SLEEP,
        (Dragon, Adult, Play) => DRAGON_ADULT_PLAY,
        (Dragon, Adult, Hungry) => DRAGON_ADULT_HUNGRY,
        (Dragon, Adult, Tired) => DRAGON_ADULT_TIRED,
        (Dragon, Adult, Bored) => DRAGON_ADULT_BORED,
        (Dragon, Adult, Dead) => DRAGON_ADULT_DEAD,
    }
}

/// Pick one frame, cycling with the caller's animation counter.
///
/// Falls back to the idle frames if a mode has none.
pub fn frame(species: Species, stage: Stage, mode: VisualMode, counter: u64) -> &'static str {
    let mut list = frames(species, stage, mode);
    if list.is_empty() {
        list = frames(species, stage, VisualMode::Idle);
    }
    if list.is_empty() {
        return "";
    }
    list[(counter % list.len() as u64) as usize]
}

const CAT_BABY_IDLE: &[&str] = &[
    r#"  /\_/\
 ( >^< )
 /  ^  \
 \_/ \_/"#,
];

const CAT_BABY_EAT: &[&str] = &[
    r#"  /\_/\
 ( =ω= )
 /  ^  \
 \_/ \_/"#,
];

const CAT_BABY_SLEEP: &[&str] = &[
    r#"  /\_/\
 ( -^- )  zz
 /  ^  \
 \_/ \_/"#,
    r#"  /\_/\
 ( -^- )  zzz
 /  ^  \
 \_/ \_/"#,
];

const CAT_BABY_PLAY: &[&str] = &[
    r#"  /\_/\ ♪
 ( >o< )
 /  ^  \
 \_/ \_/"#,
    r#"♪ /\_/\
 ( >o< )
 /  ^  \
 \_/ \_/"#,
];

const CAT_BABY_HUNGRY: &[&str] = &[
    r#"  /\_/\
 ( ·_· )
 /  ^  \
 \_/ \_/"#,
    r#"  /\_/\
 ( ;_; )
 /  ^  \
 \_/ \_/"#,
];

const CAT_BABY_TIRED: &[&str] = &[
    r#"  /\_/\
 ( -_- )
 /  ^  \
 \_/ \_/"#,
    r#"  /\_/\
 ( -.- ) z
 /  ^  \
 \_/ \_/"#,
];

const CAT_BABY_BORED: &[&str] = &[
    r#"  /\_/\
 ( -^- )
 /  ^  \
 \_/ \_/"#,
];

const CAT_BABY_DEAD: &[&str] = &[
    r#"  /\_/\
 ( x^x )
 /  ^  \
 \_/ \_/"#,
];

const CAT_ADULT_IDLE: &[&str] = &[
    r#"  /\___/\
 (  >^<  )
 /  | |  \
/   | |   \
\___/ \___/"#,
];

const CAT_ADULT_EAT: &[&str] = &[
    r#"   /\___/\
  (   >^<  )
 /  | |  \
/   | |   \
\___/ \___/"#,
    r#"   /\___/\
  (   =ω=  )
 /  | |  \
/   | |   \
\___/ \___/"#,
];

const CAT_ADULT_SLEEP: &[&str] = &[
    r#"  /\___/\
 (  -^-  )  zz
 /  | |  \
/   | |   \
\___/ \___/"#,
    r#"  /\___/\
 (  -^-  )  zzz
 /  | |  \
/   | |   \
\___/ \___/"#,
];

const CAT_ADULT_PLAY: &[&str] = &[
    r#"  /\___/\ ♪
 (  >o<  )
 /  | |  \
/   | |   \
\___/ \___/"#,
    r#"♪ /\___/\
 (  >o<  )
 /  | |  \
/   | |   \
\___/ \___/"#,
];

const CAT_ADULT_HUNGRY: &[&str] = &[
    r#"  /\___/\
 (  ·_·  )
 /  | |  \
/   | |   \
\___/ \___/"#,
    r#"  /\___/\
 (  ;_;  )
 /  | |  \
/   | |   \
\___/ \___/"#,
];

const CAT_ADULT_TIRED: &[&str] = &[
    r#" /\___/\
( -_-  )
 /  | |  \
/   | |   \
\___/ \___/"#,
    r#" /\___/\
( -.-  )   zz
 /  | |  \
/   | |   \
\___/ \___/"#,
];

const CAT_ADULT_BORED: &[&str] = &[
    r#"  /\___/\
 (  -^-  )
 /  | |  \
/   | |   \
\___/ \___/"#,
];

const CAT_ADULT_DEAD: &[&str] = &[
    r#"  /\___/\
 (  x^x  )
 /  | |  \
/   | |   \
\___/ \___/"#,
];

const DOG_BABY_IDLE: &[&str] = &[
    r#"  _____
 /)UᴥU(\
 /  V  \
 \_/ \_/"#,
];

const DOG_BABY_EAT: &[&str] = &[
    r#"  _____
 /)=ω=(\
 /  V  \
 \_/ \_/"#,
];

const DOG_BABY_SLEEP: &[&str] = &[
    r#"  _____
 /)-ᴥ-(\  zz
 /  V  \
 \_/ \_/"#,
    r#"  _____
 /)-ᴥ-(\  zzz
 /  V  \
 \_/ \_/"#,
];

const DOG_BABY_PLAY: &[&str] = &[
    r#"  _____
 /)^ᴥ^(\
 /  V  \ ⚽
 \_/ \_/"#,
    r#"  _____  ⚽
 /)^ᴥ^(\
 /  V  \
 \_/ \_/"#,
];

const DOG_BABY_HUNGRY: &[&str] = &[
    r#"  _____
 /)·ᴥ·(\
 /  V  \
 \_/ \_/"#,
    r#"  _____
 /);ᴥ;(\
 /  V  \
 \_/ \_/"#,
];

const DOG_BABY_TIRED: &[&str] = &[
    r#"  _____
 /)-ᴥ-(\
 /  V  \
 \_/ \_/"#,
    r#"  _____
 /)-ᴥ-(\  zz
 /  V  \
 \_/ \_/"#,
];

const DOG_BABY_BORED: &[&str] = &[
    r#"  _____
 /)-ᴥ-(\
 /  V  \
 \_/ \_/"#,
];

const DOG_BABY_DEAD: &[&str] = &[
    r#"  _____
 /)xᴥx(\
 /  V  \
 \_/ \_/"#,
];

const DOG_ADULT_IDLE: &[&str] = &[
    r#"  /)   (\
 /  UᴥU  \
(   | |   )
/   | |   \
\___/ \___/"#,
];

const DOG_ADULT_EAT: &[&str] = &[
    r#"   /)   (\
  /   UᴥU  \
(   | |   )
/   | |   \
\___/ \___/"#,
    r#"   /)   (\
  /   =ω=  \
(   | |   )
/   | |   \
\___/ \___/"#,
];

const DOG_ADULT_SLEEP: &[&str] = &[
    r#"  /)   (\
 /  -ᴥ-  \  zz
(   | |   )
/   | |   \
\___/ \___/"#,
    r#"  /)   (\
 /  -ᴥ-  \  zzz
(   | |   )
/   | |   \
\___/ \___/"#,
];

const DOG_ADULT_PLAY: &[&str] = &[
    r#"  /)   (\
 /  ^ᴥ^  \
(   | |   ) ⚽
/   | |   \
\___/ \___/"#,
    r#"♪ /)   (\   ⚽
 /  ^ᴥ^  \
(   | |   )
/   | |   \
\___/ \___/"#,
];

const DOG_ADULT_HUNGRY: &[&str] = &[
    r#"  /)   (\
 /  ·ᴥ·  \
(   | |   )
/   | |   \
\___/ \___/"#,
    r#"  /)   (\
 /  ;ᴥ;  \
(   | |   )
/   | |   \
\___/ \___/"#,
];

const DOG_ADULT_TIRED: &[&str] = &[
    r#" /)   (\
/ -ᴥ-  \
(   | |   )
/   | |   \
\___/ \___/"#,
    r#" /)   (\
/ -ᴥ-  \   zz
(   | |   )
/   | |   \
\___/ \___/"#,
];

const DOG_ADULT_BORED: &[&str] = &[
    r#"  /)   (\
 /  -ᴥ-  \
(   | |   )
/   | |   \
\___/ \___/"#,
];

const DOG_ADULT_DEAD: &[&str] = &[
    r#"  /)   (\
 /  xᴥx  \
(   | |   )
/   | |   \
\___/ \___/"#,
];

const DRAGON_BABY_IDLE: &[&str] = &[
    r#"   /\
 [ +_+ ]
 /  |  \
 \_/ \_/"#,
];

const DRAGON_BABY_EAT: &[&str] = &[
    r#"   /\
 [ =ω= ]
 /  |  \
 \_/ \_/"#,
];

const DRAGON_BABY_SLEEP: &[&str] = &[
    r#"   /\
 [ -_- ]  zz
 /  |  \
 \_/ \_/"#,
    r#"   /\
 [ -_- ]  zzz
 /  |  \
 \_/ \_/"#,
];

const DRAGON_BABY_PLAY: &[&str] = &[
    r#"   /\
 [ +.+ ]
 /  |🔥\
 \_/ \_/"#,
    r#"   /\
 [ +.+ ]
 /🔥|🔥\
 \_/ \_/"#,
];

const DRAGON_BABY_HUNGRY: &[&str] = &[
    r#"   /\
 [ ·_· ]
 /  |  \
 \_/ \_/"#,
    r#"   /\
 [ ;_; ]
 /  |  \
 \_/ \_/"#,
];

const DRAGON_BABY_TIRED: &[&str] = &[
    r#"   /\
 [ -_- ]
 /  |  \
 \_/ \_/"#,
    r#"   /\
 [ -.- ]  zz
 /  |  \
 \_/ \_/"#,
];

const DRAGON_BABY_BORED: &[&str] = &[
    r#"   /\
 [ -_- ]
 /  |  \
 \_/ \_/"#,
];

const DRAGON_BABY_DEAD: &[&str] = &[
    r#"   /\
 [ x_x ]
 /  |  \
 \_/ \_/"#,
];

const DRAGON_ADULT_IDLE: &[&str] = &[
    r#"      /\
   <[ +_+ ]>
   /  | |  \
  /   | |   \
  \___/ \___==^"#,
];

const DRAGON_ADULT_EAT: &[&str] = &[
    r#"       /\
    <[  +_+ ]>
   /  | |  \
  /   | |   \
  \___/ \___==^"#,
    r#"       /\
    <[  =ω= ]>
   /  | |  \
  /   | |   \
  \___/ \___==^"#,
];

const DRAGON_ADULT_SLEEP: &[&str] = &[
    r#"      /\
   <[ -_- ]>  z
   /  | |  \
  /   | |   \
  \___/ \___==^"#,
    r#"      /\
   <[ -_- ]>  zzz
   /  | |  \
  /   | |   \
  \___/ \___==^"#,
];

const DRAGON_ADULT_PLAY: &[&str] = &[
    r#"      /\
   <[ +.+ ]>
   /  | |  \
  /   | | 🔥\
  \___/ \___==^"#,
    r#"      /\
   <[ +.+ ]>
   /  | |  \
  / 🔥| |🔥 \
  \___/ \___==^"#,
];

const DRAGON_ADULT_HUNGRY: &[&str] = &[
    r#"      /\
   <[ ·_· ]>
   /  | |  \
  /   | |   \
  \___/ \___==^"#,
    r#"      /\
   <[ ;_; ]>
   /  | |  \
  /   | |   \
  \___/ \___==^"#,
];

const DRAGON_ADULT_TIRED: &[&str] = &[
    r#"     /\
  <[ -_- ]>
   /  | |  \
  /   | |   \
  \___/ \___==^"#,
    r#"     /\
  <[ -.- ]>   zz
   /  | |  \
  /   | |   \
  \___/ \___==^"#,
];

const DRAGON_ADULT_BORED: &[&str] = &[
    r#"      /\
   <[ -_- ]>
   /  | |  \
  /   | |   \
  \___/ \___==^"#,
];

const DRAGON_ADULT_DEAD: &[&str] = &[
    r#"      /\
   <[ x_x ]>
   /  | |  \
  /   | |   \
  \___/ \___==^"#,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_frames() {
        for species in Species::all() {
            for stage in [Stage::Baby, Stage::Adult] {
                for mode in VisualMode::all() {
                    assert!(
                        !frames(*species, stage, *mode).is_empty(),
                        "{} {} {} has no frames",
                        species,
                        stage,
                        mode
                    );
                }
            }
        }
    }

    #[test]
    fn test_frame_cycles_with_counter() {
        let sleep = frames(Species::Cat, Stage::Baby, VisualMode::Sleep);
        assert_eq!(sleep.len(), 2);
        assert_eq!(frame(Species::Cat, Stage::Baby, VisualMode::Sleep, 0), sleep[0]);
        assert_eq!(frame(Species::Cat, Stage::Baby, VisualMode::Sleep, 1), sleep[1]);
        assert_eq!(frame(Species::Cat, Stage::Baby, VisualMode::Sleep, 2), sleep[0]);
    }

    #[test]
    fn test_single_frame_modes_ignore_counter() {
        let a = frame(Species::Dog, Stage::Adult, VisualMode::Dead, 0);
        let b = frame(Species::Dog, Stage::Adult, VisualMode::Dead, 7);
        assert_eq!(a, b);
        assert!(a.contains("x"));
    }
}
