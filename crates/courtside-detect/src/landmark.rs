/// Named anatomical landmarks reported by the pose detector.
///
/// The set matches the full MLKit-style body vocabulary: the twelve core
/// joints the overlay always draws, plus the extended hand, foot, and
/// face points. A `Pose` always carries every one of these; the detector
/// omitting a landmark for a frame means "absent", never "missing index".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Landmark {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    MouthLeft = 5,
    MouthRight = 6,
    LeftShoulder = 7,
    RightShoulder = 8,
    LeftElbow = 9,
    RightElbow = 10,
    LeftWrist = 11,
    RightWrist = 12,
    LeftPinky = 13,
    RightPinky = 14,
    LeftIndex = 15,
    RightIndex = 16,
    LeftThumb = 17,
    RightThumb = 18,
    LeftHip = 19,
    RightHip = 20,
    LeftKnee = 21,
    RightKnee = 22,
    LeftAnkle = 23,
    RightAnkle = 24,
    LeftHeel = 25,
    RightHeel = 26,
    LeftFootIndex = 27,
    RightFootIndex = 28,
}

impl Landmark {
    pub const COUNT: usize = 29;

    /// All landmarks in index order.
    pub const ALL: [Landmark; Landmark::COUNT] = [
        Landmark::Nose,
        Landmark::LeftEye,
        Landmark::RightEye,
        Landmark::LeftEar,
        Landmark::RightEar,
        Landmark::MouthLeft,
        Landmark::MouthRight,
        Landmark::LeftShoulder,
        Landmark::RightShoulder,
        Landmark::LeftElbow,
        Landmark::RightElbow,
        Landmark::LeftWrist,
        Landmark::RightWrist,
        Landmark::LeftPinky,
        Landmark::RightPinky,
        Landmark::LeftIndex,
        Landmark::RightIndex,
        Landmark::LeftThumb,
        Landmark::RightThumb,
        Landmark::LeftHip,
        Landmark::RightHip,
        Landmark::LeftKnee,
        Landmark::RightKnee,
        Landmark::LeftAnkle,
        Landmark::RightAnkle,
        Landmark::LeftHeel,
        Landmark::RightHeel,
        Landmark::LeftFootIndex,
        Landmark::RightFootIndex,
    ];
}

impl From<Landmark> for usize {
    fn from(landmark: Landmark) -> usize {
        landmark as usize
    }
}

impl TryFrom<usize> for Landmark {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Landmark::ALL.get(value).copied().ok_or_else(|| {
            format!(
                "Invalid landmark index: {}. Must be in range 0-{}.",
                value,
                Landmark::COUNT - 1
            )
        })
    }
}
