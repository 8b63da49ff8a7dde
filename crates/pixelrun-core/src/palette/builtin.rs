//! Built-in Rec Room marker palettes.

/// The 62-color marker palette, including tan and eraser.
///
/// Order matters: nearest-color ties resolve to the earliest entry.
pub(super) const REC_ROOM: [([u8; 3], char); 62] = [
    ([101, 113, 149], '!'),
    ([147, 152, 173], '#'),
    ([154, 171, 207], '$'),
    ([84, 88, 107], '%'),
    ([28, 43, 94], '&'),
    ([117, 137, 171], '('),
    ([38, 96, 154], ')'),
    ([206, 214, 227], '*'),
    ([25, 151, 161], '+'),
    ([163, 202, 211], ','),
    ([51, 65, 103], '.'),
    ([29, 30, 43], '/'),
    ([112, 148, 193], ':'),
    ([122, 201, 199], ';'),
    ([29, 61, 138], '<'),
    ([77, 51, 25], '='),
    ([108, 75, 33], '>'),
    ([96, 192, 190], '?'),
    ([192, 190, 191], '@'),
    ([128, 127, 139], '['),
    ([43, 75, 148], 'Ñ'),
    ([0, 0, 0], ']'),
    ([38, 68, 138], '^'),
    ([35, 54, 119], '_'),
    ([50, 83, 155], '{'),
    ([46, 80, 154], '|'),
    ([43, 51, 85], '}'),
    ([34, 43, 73], '~'),
    ([54, 91, 163], '¢'),
    ([36, 61, 130], '£'),
    ([29, 38, 69], '¤'),
    ([28, 44, 105], '¥'),
    ([38, 53, 104], '¦'),
    ([59, 98, 169], '§'),
    ([49, 56, 91], '¨'),
    ([234, 237, 243], '©'),
    ([49, 76, 147], 'ª'),
    ([36, 45, 83], '«'),
    ([29, 51, 116], '¬'),
    ([27, 41, 87], 'Ö'),
    ([50, 73, 137], '®'),
    ([235, 240, 246], '¯'),
    ([52, 60, 98], '°'),
    ([26, 34, 61], '±'),
    ([29, 48, 108], '²'),
    ([233, 235, 236], '³'),
    ([44, 66, 121], '´'),
    ([50, 69, 121], 'µ'),
    ([67, 102, 169], '¶'),
    ([18, 28, 56], '·'),
    ([66, 107, 178], '¸'),
    ([55, 65, 103], '¹'),
    ([32, 46, 103], 'º'),
    ([28, 60, 131], '»'),
    ([242, 242, 244], '¼'),
    ([241, 240, 237], '½'),
    ([40, 48, 78], '¾'),
    ([29, 46, 112], '¿'),
    ([56, 81, 139], 'À'),
    ([1, 165, 154], 'È'),
    ([195, 205, 229], 'Ì'),
    ([8, 10, 25], 'Ð'),
];

/// Every marker color known to the importer, in definition order.
///
/// A superset of [`REC_ROOM`] that also covers the shades added after the
/// original 62.
pub(super) const REC_ROOM_EXTENDED: [([u8; 3], char); 107] = [
    ([101, 113, 149], '!'),
    ([147, 152, 173], '#'),
    ([154, 171, 207], '$'),
    ([84, 88, 107], '%'),
    ([28, 43, 94], '&'),
    ([117, 137, 171], '('),
    ([38, 96, 154], ')'),
    ([206, 214, 227], '*'),
    ([25, 151, 161], '+'),
    ([163, 202, 211], ','),
    ([51, 65, 103], '.'),
    ([29, 30, 43], '/'),
    ([112, 148, 193], ':'),
    ([122, 201, 199], ';'),
    ([29, 61, 138], '<'),
    ([77, 51, 25], '='),
    ([108, 75, 33], '>'),
    ([96, 192, 190], '?'),
    ([192, 190, 191], '@'),
    ([128, 127, 139], '['),
    ([43, 75, 148], 'Ñ'),
    ([0, 0, 0], ']'),
    ([38, 68, 138], '^'),
    ([35, 54, 119], '_'),
    ([50, 83, 155], '{'),
    ([46, 80, 154], '|'),
    ([43, 51, 85], '}'),
    ([34, 43, 73], '~'),
    ([54, 91, 163], '¢'),
    ([36, 61, 130], '£'),
    ([29, 38, 69], '¤'),
    ([28, 44, 105], '¥'),
    ([38, 53, 104], '¦'),
    ([59, 98, 169], '§'),
    ([49, 56, 91], '¨'),
    ([234, 237, 243], '©'),
    ([49, 76, 147], 'ª'),
    ([36, 45, 83], '«'),
    ([29, 51, 116], '¬'),
    ([27, 41, 87], 'Ö'),
    ([50, 73, 137], '®'),
    ([235, 240, 246], '¯'),
    ([52, 60, 98], '°'),
    ([26, 34, 61], '±'),
    ([29, 48, 108], '²'),
    ([233, 235, 236], '³'),
    ([44, 66, 121], '´'),
    ([50, 69, 121], 'µ'),
    ([67, 102, 169], '¶'),
    ([18, 28, 56], '·'),
    ([66, 107, 178], '¸'),
    ([55, 65, 103], '¹'),
    ([32, 46, 103], 'º'),
    ([28, 60, 131], '»'),
    ([242, 242, 244], '¼'),
    ([241, 240, 237], '½'),
    ([40, 48, 78], '¾'),
    ([29, 46, 112], '¿'),
    ([56, 81, 139], 'À'),
    ([1, 165, 154], 'È'),
    ([200, 200, 201], 'ß'),
    ([219, 229, 245], 'Ä'),
    ([213, 218, 232], 'ê'),
    ([201, 212, 233], 'ö'),
    ([184, 199, 227], 'Ø'),
    ([8, 10, 25], 'Ð'),
    ([68, 92, 150], 'Ý'),
    ([19, 28, 70], 'ä'),
    ([167, 183, 215], 'î'),
    ([237, 241, 237], 'Œ'),
    ([90, 116, 168], 'Ç'),
    ([29, 65, 136], 'Ž'),
    ([14, 24, 52], 'ÿ'),
    ([240, 238, 244], 'Ú'),
    ([184, 196, 218], 'É'),
    ([152, 167, 201], 'Ê'),
    ([220, 226, 234], 'Æ'),
    ([198, 202, 215], 'Ë'),
    ([13, 19, 41], 'Ù'),
    ([18, 22, 40], 'Ü'),
    ([116, 137, 183], 'a'),
    ([71, 98, 155], 'ƒ'),
    ([102, 121, 168], 'ñ'),
    ([62, 104, 177], 'å'),
    ([106, 132, 182], 'Å'),
    ([134, 155, 197], 'ë'),
    ([135, 149, 185], 'Ï'),
    ([86, 104, 153], 'ï'),
    ([32, 46, 113], 'ù'),
    ([70, 87, 137], 'ý'),
    ([68, 72, 102], 'Ã'),
    ([181, 185, 199], 'Â'),
    ([211, 220, 242], 'ž'),
    ([28, 68, 148], 'Á'),
    ([122, 147, 194], 'Ò'),
    ([195, 205, 229], 'Ì'),
    ([86, 90, 117], 'Í'),
    ([165, 169, 183], 'Ó'),
    ([151, 171, 210], 'Ô'),
    ([71, 113, 183], 'Õ'),
    ([241, 238, 236], '€'),
    ([13, 16, 28], 'Š'),
    ([84, 109, 164], '†'),
    ([180, 188, 213], '‡'),
    ([169, 179, 202], '™'),
    ([9, 11, 36], 'š'),
    ([148, 152, 169], 'œ'),
];
