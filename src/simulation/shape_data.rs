//! Hand-authored point tables for the traced shapes.
//!
//! Coordinates are in the source artwork's pixel space. Each table comes
//! with the centre and scale that bring it to roughly a 140 px box around
//! the origin; `shapes` applies them once when the library is built.

/// A traced shape: raw artwork points plus its normalisation
pub struct Artwork {
    pub center: [f64; 2],
    pub scale: f64,
    pub points: &'static [[f64; 2]],
}

pub const PUZZLE: Artwork = Artwork {
    center: [567.0, 561.0],
    scale: 0.12,
    points: &PUZZLE_POINTS,
};

pub const EYE: Artwork = Artwork {
    center: [803.0, 355.0],
    scale: 0.1,
    points: &EYE_POINTS,
};

pub const CALIPERS: Artwork = Artwork {
    center: [397.0, 698.0],
    scale: 0.11,
    points: &CALIPERS_POINTS,
};

pub const FLOWER: Artwork = Artwork {
    center: [610.0, 770.0],
    scale: 0.11,
    points: &FLOWER_POINTS,
};

pub const LOGO: Artwork = Artwork {
    center: [600.0, 567.0],
    scale: 0.12,
    points: &LOGO_POINTS,
};

// puzzle piece
const PUZZLE_POINTS: [[f64; 2]; 95] = [
    [817.17, 144.01], [811.29, 89.78], [778.83, 49.06], [741.4, 24.06], [693.66, 12.5], [798.79, 189.73],
    [782.35, 235.44], [799.86, 1110.07], [856.27, 276.08], [909.37, 276.08], [962.47, 276.08], [1015.57, 276.08],
    [1068.67, 276.08], [1121.77, 276.08], [1121.77, 374.15], [1121.77, 325.11], [1121.77, 423.2], [1121.77, 472.25],
    [1121.77, 717.48], [1121.77, 766.53], [1121.77, 815.57], [1121.77, 864.62], [1121.77, 913.67], [1121.77, 962.71],
    [1121.77, 1011.76], [1121.77, 1060.81], [1121.77, 1110.07], [1121.77, 668.43], [1121.77, 570.34], [1121.77, 619.39],
    [1121.77, 521.29], [273.24, 276.08], [273.24, 374.44], [273.24, 325.39], [273.24, 423.48], [273.24, 472.53],
    [273.24, 815.86], [273.24, 864.9], [273.24, 913.95], [273.24, 963.0], [273.24, 1012.04], [273.24, 1061.09],
    [273.24, 1110.07], [273.24, 570.62], [273.24, 521.58], [325.27, 276.08], [378.37, 276.08], [431.47, 276.08],
    [484.57, 276.08], [537.67, 276.08], [587.46, 1110.07], [569.4, 144.01], [575.28, 89.78], [607.74, 49.06],
    [645.17, 24.06], [587.78, 189.73], [604.22, 235.44], [815.54, 979.04], [809.66, 924.81], [777.2, 884.09],
    [739.77, 859.09], [692.03, 847.52], [797.16, 1024.75], [780.72, 1070.47], [567.77, 979.04], [573.65, 924.81],
    [606.11, 884.09], [643.54, 859.09], [586.15, 1024.75], [602.59, 1070.47], [856.27, 1110.07], [909.37, 1110.07],
    [962.47, 1110.07], [1015.57, 1110.07], [1068.67, 1110.07], [325.27, 1110.07], [378.37, 1110.07], [431.47, 1110.07],
    [484.57, 1110.07], [537.67, 1110.07], [799.86, 1110.07], [587.46, 1110.07], [144.01, 570.34], [89.78, 576.22],
    [49.06, 608.68], [24.06, 646.11], [12.5, 693.85], [189.73, 588.72], [235.44, 605.16], [144.01, 818.11],
    [89.78, 812.23], [49.06, 779.77], [24.06, 742.34], [189.73, 799.73], [235.44, 783.29],
];

// eye
const EYE_POINTS: [[f64; 2]; 122] = [
    [563.61, 31.25], [616.85, 23.7], [670.36, 18.75], [723.87, 14.93], [777.11, 12.5], [511.26, 40.93],
    [457.59, 52.43], [405.36, 64.93], [350.57, 81.62], [299.78, 99.76], [252.51, 122.04], [210.24, 144.9],
    [171.66, 171.58], [134.08, 201.45], [64.91, 272.08], [97.5, 235.87], [38.19, 313.44], [12.5, 356.36],
    [1042.84, 31.77], [989.6, 24.23], [936.09, 19.27], [882.58, 15.45], [829.34, 13.02], [1095.19, 41.45],
    [1148.86, 52.95], [1201.09, 65.45], [1255.88, 82.14], [1306.67, 100.28], [1353.94, 122.56], [1396.21, 145.43],
    [1434.79, 172.1], [1472.37, 201.98], [1541.54, 272.6], [1508.95, 236.39], [1568.26, 313.97], [1593.95, 356.88],
    [563.61, 679.36], [616.85, 686.9], [670.36, 691.86], [723.87, 695.68], [777.11, 698.11], [511.26, 669.68],
    [457.59, 658.18], [405.36, 645.68], [350.57, 628.99], [299.78, 610.85], [252.51, 588.57], [210.24, 565.71],
    [171.66, 539.03], [134.08, 509.16], [64.91, 438.53], [97.5, 474.74], [38.19, 397.17], [1042.84, 678.84],
    [989.6, 686.38], [936.09, 691.34], [882.58, 695.16], [829.34, 697.59], [1095.19, 669.16], [1148.86, 657.66],
    [1201.09, 645.16], [1255.88, 628.46], [1306.67, 610.33], [1353.94, 588.05], [1396.21, 565.18], [1434.79, 538.51],
    [1472.37, 508.63], [1541.54, 438.01], [1508.95, 474.22], [1568.26, 396.64], [587.83, 349.43], [595.76, 301.37],
    [803.49, 147.73], [677.37, 186.08], [613.93, 257.71], [641.09, 219.5], [757.77, 150.98], [717.04, 164.48],
    [593.9, 399.17], [798.49, 562.87], [670.5, 517.85], [610.18, 443.57], [635.68, 482.91], [755.77, 557.08],
    [711.45, 541.67], [1018.62, 358.34], [1012.75, 309.98], [936.16, 191.3], [996.47, 265.58], [970.98, 226.24],
    [850.89, 152.07], [895.2, 167.48], [1010.42, 407.78], [928.81, 523.06], [992.25, 451.44], [965.1, 489.65],
    [841.94, 558.61], [886.88, 545.11], [641.62, 354.85], [803.23, 193.45], [686.31, 242.71], [646.03, 313.99],
    [660.53, 276.09], [758.99, 199.31], [718.39, 216.69], [964.83, 354.85], [920.14, 242.71], [960.42, 313.99],
    [945.92, 276.09], [847.46, 199.31], [888.06, 216.69], [803.23, 517.16], [686.31, 467.9], [646.03, 396.62],
    [660.53, 434.52], [758.99, 511.3], [718.39, 493.92], [920.14, 467.9], [960.42, 396.62], [945.92, 434.52],
    [847.46, 511.3], [888.06, 493.92],
];

// calipers
const CALIPERS_POINTS: [[f64; 2]; 107] = [
    [12.5, 1383.58], [23.03, 1349.58], [33.55, 1315.59], [44.07, 1281.6], [54.59, 1247.61], [65.11, 1213.62],
    [75.63, 1179.63], [86.16, 1145.64], [96.68, 1111.65], [107.2, 1077.66], [117.72, 1043.67], [128.24, 1009.68],
    [149.29, 941.7], [138.76, 975.69], [159.81, 907.71], [170.33, 873.71], [180.85, 839.72], [191.37, 805.73],
    [201.9, 771.74], [212.42, 737.75], [222.94, 703.76], [233.22, 669.69], [243.74, 635.7], [254.26, 601.71],
    [264.78, 567.72], [275.31, 533.73], [285.83, 499.74], [296.35, 465.75], [306.87, 431.76], [317.39, 397.77],
    [327.91, 363.78], [338.44, 329.79], [348.96, 295.8], [359.48, 261.81], [370.0, 227.81], [380.52, 193.82],
    [391.04, 159.83], [401.57, 125.84], [782.07, 1384.14], [771.55, 1350.15], [761.03, 1316.16], [750.5, 1282.17],
    [739.98, 1248.18], [729.46, 1214.19], [718.94, 1180.2], [708.42, 1146.21], [697.89, 1112.22], [687.37, 1078.23],
    [676.85, 1044.24], [655.81, 976.25], [666.33, 1010.24], [645.29, 942.26], [634.76, 908.27], [624.24, 874.28],
    [613.72, 840.29], [603.2, 806.3], [592.68, 772.31], [582.15, 738.32], [571.88, 704.25], [561.35, 670.26],
    [550.83, 636.27], [540.31, 602.28], [529.79, 568.29], [519.27, 534.3], [508.74, 500.31], [498.22, 466.32],
    [487.7, 432.33], [477.18, 398.34], [466.66, 364.35], [456.14, 330.35], [445.61, 296.36], [435.09, 262.37],
    [424.57, 228.38], [414.05, 194.39], [615.4, 565.72], [613.72, 638.27], [757.27, 568.29], [757.27, 638.27],
    [757.27, 601.72], [721.68, 601.72], [686.1, 601.72], [614.94, 601.72], [650.52, 601.72], [579.36, 601.72],
    [543.77, 601.72], [508.19, 601.72], [472.61, 601.72], [437.03, 601.72], [401.45, 601.72], [365.86, 601.72],
    [330.28, 601.46], [294.7, 601.46], [479.16, 42.0], [401.45, 12.5], [324.35, 42.0], [442.41, 19.72],
    [360.48, 19.72], [287.81, 116.65], [299.35, 76.24], [333.13, 215.31], [291.75, 153.59], [306.87, 188.54],
    [512.71, 153.59], [503.16, 76.24], [515.19, 116.65], [466.66, 215.88], [497.22, 188.54],
];

// flower
const FLOWER_POINTS: [[f64; 2]; 133] = [
    [534.19, 431.61], [543.41, 481.15], [550.38, 570.01], [546.69, 524.42], [550.86, 388.28], [506.1, 378.07],
    [468.25, 361.2], [469.25, 318.61], [513.1, 300.25], [561.91, 299.25], [605.82, 318.61], [641.72, 352.77],
    [597.77, 370.57], [669.09, 318.75], [719.6, 299.41], [776.99, 289.2], [829.57, 284.03], [889.28, 280.03],
    [999.71, 282.03], [943.32, 279.03], [1056.1, 289.2], [1110.0, 299.41], [1158.49, 320.61], [1206.97, 353.07],
    [1165.49, 385.78], [684.01, 253.52], [648.43, 286.91], [593.72, 454.34], [574.39, 419.11], [499.6, 1526.09],
    [508.74, 1479.51], [543.41, 1239.56], [515.82, 1429.1], [522.69, 1382.39], [535.19, 1285.56], [528.32, 1333.97],
    [547.69, 1187.23], [553.38, 1091.6], [551.38, 1143.14], [556.0, 1051.24], [556.38, 1002.72], [558.27, 954.21],
    [560.19, 912.7], [561.19, 869.28], [561.19, 826.86], [561.88, 782.59], [560.88, 740.07], [558.27, 697.56],
    [556.38, 655.04], [553.38, 617.24], [598.43, 1017.19], [632.01, 991.67], [667.6, 968.45], [692.6, 943.44],
    [713.41, 911.71], [751.46, 874.44], [780.59, 891.25], [816.36, 899.66], [846.27, 875.84], [869.68, 843.47],
    [878.72, 802.81], [869.36, 763.3], [1058.1, 400.07], [1112.49, 395.78], [719.6, 220.05], [755.18, 177.63],
    [781.6, 137.85], [800.99, 85.04], [788.49, 33.63], [737.17, 12.5], [682.59, 21.13], [635.93, 49.5],
    [604.32, 85.04], [577.27, 120.8], [553.19, 169.28], [541.69, 207.99], [537.41, 253.52], [490.01, 270.66],
    [455.85, 249.52], [403.53, 220.05], [350.93, 195.49], [300.56, 173.28], [811.03, 768.24], [792.94, 808.26],
    [762.22, 836.4], [671.16, 600.95], [642.43, 557.93], [616.82, 507.93], [445.53, 403.08], [401.23, 427.61],
    [356.94, 450.0], [303.56, 477.15], [256.83, 495.42], [202.82, 518.56], [148.81, 532.93], [94.8, 545.43],
    [40.79, 541.43], [241.37, 154.76], [187.51, 142.26], [125.65, 131.76], [63.79, 133.3], [23.38, 165.13],
    [45.66, 198.49], [94.8, 235.55], [148.81, 265.45], [202.82, 284.03], [264.74, 299.7], [323.34, 311.55],
    [381.94, 325.22], [421.03, 350.77], [369.44, 357.07], [310.84, 369.57], [256.83, 382.07], [202.82, 397.78],
    [148.81, 415.58], [94.8, 441.84], [51.29, 466.57], [12.5, 506.06], [841.26, 735.78], [717.32, 623.91],
    [769.1, 613.46], [790.41, 566.01], [777.91, 507.92], [749.67, 462.5], [711.6, 427.6], [677.54, 390.57],
    [695.6, 353.28], [752.17, 366.28], [812.93, 375.57], [872.15, 381.78], [920.23, 388.07], [966.4, 394.07],
    [1012.21, 400.07],
];

// logo
const LOGO_POINTS: [[f64; 2]; 134] = [
    [49.99, 12.5], [85.58, 12.5], [121.16, 12.5], [156.74, 12.5], [192.32, 12.5], [227.9, 12.5],
    [263.49, 12.5], [299.07, 12.5], [334.65, 12.5], [370.23, 12.5], [405.81, 12.5], [441.4, 12.5],
    [476.98, 12.5], [512.56, 12.5], [548.14, 12.5], [583.72, 12.5], [619.31, 12.5], [654.89, 12.5],
    [726.05, 12.5], [690.47, 12.5], [761.63, 12.5], [797.22, 12.5], [832.8, 12.5], [868.38, 12.5],
    [903.96, 12.5], [12.5, 1121.34], [34.82, 1093.63], [57.15, 1065.92], [79.47, 1038.21], [101.8, 1010.51],
    [124.12, 982.8], [146.44, 955.09], [168.77, 927.38], [191.09, 899.67], [213.41, 871.97], [235.74, 844.26],
    [258.06, 816.55], [302.71, 761.14], [280.39, 788.84], [325.03, 733.43], [347.36, 705.72], [369.68, 678.01],
    [392.0, 650.3], [414.33, 622.6], [436.65, 594.89], [458.98, 567.18], [481.1, 539.31], [503.43, 511.6],
    [525.75, 483.9], [548.07, 456.19], [570.4, 428.48], [592.72, 400.77], [615.04, 373.06], [637.37, 345.36],
    [659.69, 317.65], [682.02, 289.94], [704.34, 262.23], [726.66, 234.53], [748.99, 206.82], [771.31, 179.11],
    [793.63, 151.4], [815.96, 123.69], [838.28, 95.99], [860.61, 68.28], [882.93, 40.57], [47.72, 1121.86],
    [83.3, 1121.86], [118.89, 1121.86], [154.47, 1121.86], [190.05, 1121.86], [225.63, 1121.86], [261.21, 1121.86],
    [296.8, 1121.86], [332.38, 1121.86], [367.96, 1121.86], [403.54, 1121.86], [439.12, 1121.86], [474.71, 1121.86],
    [510.29, 1121.86], [545.87, 1121.86], [581.45, 1121.86], [617.03, 1121.86], [652.62, 1121.86], [689.3, 644.3],
    [724.88, 644.3], [760.46, 644.3], [796.05, 644.3], [831.63, 644.3], [867.21, 644.3], [902.79, 644.3],
    [938.37, 644.3], [973.96, 644.3], [1009.54, 644.3], [1045.12, 644.3], [1080.7, 644.3], [1116.28, 644.3],
    [1151.87, 644.3], [1187.45, 644.3], [689.47, 1120.49], [725.46, 1115.3], [760.45, 1108.11], [796.63, 1097.63],
    [831.63, 1086.13], [865.21, 1072.63], [897.43, 1057.08], [928.87, 1042.21], [958.35, 1024.01], [986.33, 1001.67],
    [1014.32, 979.09], [1040.31, 956.09], [1063.3, 930.38], [1084.2, 903.67], [1102.78, 876.47], [1119.27, 848.26],
    [1137.18, 816.55], [1150.87, 783.84], [1164.37, 751.13], [1177.37, 716.13], [1184.37, 679.13], [1180.82, 461.52],
    [1174.53, 427.31], [1164.51, 394.15], [1150.11, 361.36], [1135.49, 328.51], [1119.94, 297.49], [1101.0, 268.66],
    [1080.56, 241.6], [1059.04, 216.65], [1036.02, 193.46], [1009.98, 168.01], [981.89, 146.38], [953.74, 124.92],
    [923.26, 103.37], [889.3, 87.09],
];
