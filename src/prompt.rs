//! Playlist generation prompt.
//!
//! This is the response contract the extraction pipeline is built around:
//! the prompt asks the model for the `SONGS:` / `TOP SONG: #X` format the
//! segmenter keys on. Kept in one place so the two sides cannot drift apart
//! silently; the tests pin the markers to the segmenter's constants.

/// Prompt asking a model to describe an image as a ranked playlist.
pub const PLAYLIST_PROMPT: &str = "\
Analyze this image and create a music playlist of 9 songs based on the mood, \
elements, and overall feeling of the image. Out of those 9 pick 1 that best \
represents the image.

Please provide your response in the exact following format:

1. First, write a brief explanation (2-4 sentences) about why the playlist \
matches the image.

2. Then provide a list of songs with this exact format:

SONGS:
1. \"Song Title\" - Artist Name
2. \"Song Title\" - Artist Name
(and so on for all 9 songs)

3. Finally, indicate the top song that best represents the vibe of the image with:
TOP SONG: #X

Where X is the number of the song from your list above.";
