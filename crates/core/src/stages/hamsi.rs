//! Hamsi-512
//!
//! Absorbs 8-byte blocks: each block is expanded to sixteen words through a
//! linear code (one table row per message bit), interleaved with the 512-bit
//! chaining value into a 4x8 word matrix, and transformed by Serpent-style
//! S-box and diffusion rounds. The closing length block runs the doubled
//! final permutation.

const BLOCK: usize = 8;
const ROUNDS: usize = 6;
const FINAL_ROUNDS: usize = 12;

// ASCII of the designers' address, as the original submission fixes it.
#[rustfmt::skip]
const IV: [u32; 16] = [
    0x73746565, 0x6c706172, 0x6b204172, 0x656e6265, 0x72672031, 0x302c2062, 0x75732032, 0x3434362c,
    0x20422d33, 0x30303120, 0x4c657576, 0x656e2d48, 0x65766572, 0x6c65652c, 0x2042656c, 0x6769756d,
];

/// Expansion rows of the linear code, one per message bit.
#[rustfmt::skip]
const T: [[u32; 16]; 64] = [
    [0x95a16a13, 0x97c8cd3e, 0x98dc3826, 0x9b028101, 0x9f4ce111, 0xa282c01c, 0xa7d8ebe4, 0xa8e99dbd, 0xae3a6895, 0xb5a4103b, 0xbaea416b, 0xbe124710, 0xc45da5b5, 0xc5699b30, 0xc7810289, 0xc88c748b],
    [0xcdc320ae, 0xd3ff2698, 0xd50890ee, 0xdd4de242, 0xde55cd42, 0xe16c90f5, 0xe37aebac, 0xe481da19, 0xe9a20f89, 0xedb8e7ba, 0xf6e2e50e, 0x0306de77, 0x050aaac2, 0x080f3261, 0x0c131143, 0x14136d75],
    [0x1512c8fb, 0x17110b55, 0x1b0bbede, 0x22f9ee1b, 0x23f707e2, 0x25f0c94c, 0x29e28526, 0x2cd645ac, 0x2fc8b41b, 0x31beed4b, 0x379e1b8a, 0x38982189, 0x434cea93, 0x4635692c, 0x472d4aee, 0x4a1417a0],
    [0x4c0296c7, 0x4ee7488d, 0x55a2b203, 0x58833952, 0x5a6d8dfb, 0x5b628399, 0x5e40922e, 0x60294280, 0x630545d9, 0x68b9a542, 0x6b9203e7, 0x6e692e37, 0x75053e58, 0x76e77fd8, 0x79b9e578, 0x7f5b27c7],
    [0x83196442, 0x85e6b5d1, 0x87c4473b, 0x93d801ac, 0x9c27e9a1, 0xa0c1b56b, 0xa46db6bb, 0xa642f9dd, 0xa901f296, 0xa9ec06bc, 0xaca98777, 0xb6ac5b79, 0xbc1c1fed, 0xbd03aafc, 0xc43bbdbd, 0xc7d4f204],
    [0xc9a0d7f5, 0xcf01bca5, 0xd542d5ce, 0xd9b70609, 0xda9ab7c2, 0xdc61c394, 0xdfee7dba, 0xe296d8ae, 0xe53e2f93, 0xe702842e, 0xe7e48363, 0xe9a82bcd, 0xec4cd1f1, 0xefd175e9, 0xf1931d94, 0xf273c6f4],
    [0xf51519ab, 0xf9751b8d, 0xfa54c7d8, 0xfeb182be, 0x022cf0d6, 0x03ea01e1, 0x09fc5a96, 0x0e4f64eb, 0x137c5714, 0x1458cb76, 0x16ed8703, 0x18a57db4, 0x198150d7, 0x205c2924, 0x26563612, 0x280a713e],
    [0x2a98055a, 0x2dfe07b5, 0x30897832, 0x323b4184, 0x39d64ea0, 0x3d350f03, 0x41694277, 0x43edcabb, 0x46716fce, 0x49ca412b, 0x4df713a2, 0x52f67467, 0x58c6ab25, 0x5a6f021f, 0x5ceacd0d, 0x5f65bc67],
    [0x603930da, 0x6bbfa533, 0x6c91b029, 0x70aa813b, 0x73efe32c, 0x75920626, 0x7b469aaa, 0x7ce7168c, 0x8026f627, 0x85040c39, 0x87715eef, 0x8c49971a, 0x8de647d0, 0x9050a5ac, 0x98581abd, 0x9c588753],
    [0x9d25268d, 0xa386fce7, 0xadda2a63, 0xaf6f856f, 0xb03a1231, 0xb4f7957d, 0xb7553237, 0xb8e883f5, 0xbda0746c, 0xbffb4b14, 0xc31de902, 0xc4aeb840, 0xc7cf582b, 0xd0624402, 0xd1294ff7, 0xd2b72941],
    [0xd37df6a1, 0xd8251276, 0xe2f50a93, 0xe3ba2734, 0xe60902ea, 0xe85727c8, 0xeaa49659, 0xec2d25b9, 0xee7965b0, 0xef3d52cc, 0xf3d33c9d, 0xf559eab8, 0xf9ec17bf, 0xfaaed9da, 0xfe7b7c28, 0xff3dc7e8],
    [0x054d63d8, 0x060eff5e, 0x0c191fba, 0x0e5bac5b, 0x15df49ba, 0x1bdcceba, 0x1ed9ca0b, 0x2057d66b, 0x2116c059, 0x22945bc9, 0x23530d55, 0x2b7fdc1c, 0x2e76b358, 0x32e6cbc5, 0x351ddf85, 0x38cd91f8],
    [0x398a1872, 0x3b02eeb8, 0x3d37a7b2, 0x3df3c10b, 0x4027a061, 0x43d2009e, 0x448d776c, 0x48f0c756, 0x4c96f38a, 0x4d5193bd, 0x50f5aa6d, 0x560bb056, 0x5838aadb, 0x59aba4dd, 0x5bd798ac, 0x5ebbe989],
    [0x60e66f93, 0x63105993, 0x68d27ca1, 0x6d214591, 0x6dd8d5e2, 0x6f47c35e, 0x7449eb17, 0x766e6bc4, 0x77dbc280, 0x7ab5a5ff, 0x7e4488ea, 0x811c11aa, 0x833d0965, 0x855d6bb7, 0x8d248708, 0x8f42355b],
    [0x8ff6a413, 0x937bd8e3, 0x9866de77, 0x99ce0536, 0x9be84656, 0xa233a618, 0xa2e660b4, 0xa66316b5, 0xab424780, 0xaca61046, 0xad57dd03, 0xb0cff0bf, 0xb5a8ad5e, 0xb70a9fec, 0xb9cdca6e, 0xc0016041],
    [0xc161829e, 0xc37142fc, 0xc4210f1d, 0xc5807975, 0xc78f2662, 0xc83e96da, 0xcc59fa46, 0xcdb7f761, 0xd48a5f40, 0xdc04a6eb, 0xe015d6e6, 0xe0c32b10, 0xe21da711, 0xe424f275, 0xe62bb968, 0xe6d88904],
    [0xe8de9fe3, 0xf045e4fe, 0xf0f1d9dd, 0xf2f5619a, 0xf851a5f1, 0xfa53525e, 0xfe5528db, 0xfeffeffe, 0x00fff001, 0x04fe70cf, 0x0a4eb009, 0x0af8789e, 0x0c4bdfb2, 0x0e489142, 0x12e99c3e, 0x143bb46a],
    [0x14e4abae, 0x1ad2ee7a, 0x22b48273, 0x25fae638, 0x27f14bd3, 0x2898a7ea, 0x2bdca982, 0x2c83b488, 0x2fc621bf, 0x306cdc16, 0x33adb6d4, 0x35a0cce4, 0x36470eea, 0x3985917b, 0x3a2b83c3, 0x3d68788e],
    [0x3f5939b9, 0x41eed841, 0x4b98a0e6, 0x4eceae77, 0x4f72f0c0, 0x52a77a94, 0x5537011e, 0x57221f43, 0x5a53a6f1, 0x60101228, 0x61f8a6e6, 0x65c87b72, 0x69968b20, 0x6a38b72f, 0x6fea11c5, 0x71cefa93],
    [0x7312026c, 0x74f6315a, 0x76d9f117, 0x7c8297a3, 0x7d23505b, 0x80463496, 0x84a8412e, 0x86886beb, 0x87c84be5, 0x886829c2, 0x89a7c144, 0x91215c23, 0x91c085d3, 0x957a8581, 0x9756e4bb, 0x9c4b2ead],
    [0x9ec43853, 0xa09e840e, 0xa278662e, 0xa8039536, 0xacedfd25, 0xad8b1601, 0xaec5250f, 0xb09be51a, 0xb138b8be, 0xb30eeea5, 0xb4e4bd33, 0xb7f2db10, 0xb9c7971b, 0xbd6fdbcb, 0xc1168812, 0xc68d9084],
    [0xc728cb00, 0xc8fa3730, 0xca304756, 0xcfa167a0, 0xd20b714d, 0xd9456909, 0xda7922de, 0xdb12ef54, 0xdc466760, 0xde13495f, 0xdeacd42f, 0xe245301b, 0xe377a261, 0xe7a6dccf, 0xf09766f1, 0xf39027de],
    [0xf5581bb5, 0xf8e6e481, 0xfd0b97b9, 0xfed18f73, 0x01c55a11, 0x054ef362, 0x05e5bdb1, 0x07133304, 0x08d714e2, 0x0b3105d8, 0x0cf40daa, 0x0fe2f67d, 0x10790616, 0x11a5065d, 0x15bdc37b, 0x177e9f4b],
    [0x193f1f16, 0x1a69ebec, 0x1c29d2c2, 0x1cbf0b5b, 0x1fa88e08, 0x203d89c1, 0x24e3fba9, 0x285f29ff, 0x2ab08037, 0x2fe539ac, 0x310cf556, 0x32c8445d, 0x363dd6fd, 0x36d14cd6, 0x388b7335, 0x3a4540f4],
    [0x3bfeb641, 0x44064d41, 0x45bdd09a, 0x49be052f, 0x4ae24f7c, 0x4d2a7069, 0x5003c12b, 0x524a8857, 0x55b3944c, 0x5acea38a, 0x5bf0b059, 0x5c81a88f, 0x5da37c9e, 0x646b5d7b, 0x67cd533b, 0x697dcfff],
    [0x6a0de6f1, 0x6e8d4fc4, 0x703c7e0a, 0x71eb5916, 0x75d76abd, 0x78a3881b, 0x7c8c9704, 0x7daa4919, 0x86047a5a, 0x87af2983, 0x89598799, 0x8b0394c1, 0x8d3b28ab, 0x8ee47994, 0x8fffd829, 0x908d7a0f],
    [0x93de8a53, 0x95869a68, 0x96a1236e, 0x972e5aa6, 0x98d5cb33, 0x9ee3c071, 0xa089bf06, 0xa11657af, 0xa22f6ebd, 0xa71ea61a, 0xa7aad605, 0xa8c31bc7, 0xac0b1ccd, 0xac96fea8, 0xae3a705e, 0xaf51e657],
    [0xb6671e77, 0xb808c02c, 0xb9aa1508, 0xbac022fb, 0xbcebd8c3, 0xbfa1bcf0, 0xc848a546, 0xcc98f2fb, 0xcd22d714, 0xcec05156, 0xcfd3ce86, 0xd05d80a4, 0xd170cbef, 0xd1fa6520, 0xd4a9e6b2, 0xd86b0d83],
    [0xda067de1, 0xdb189fa7, 0xdd3c80a5, 0xdfe8a17d, 0xe182b97c, 0xe6d7a289, 0xe7e83c75, 0xe8707d43, 0xea090f1e, 0xf1ffa7af, 0xf30eef31, 0xf52d1e32, 0xf7d2254e, 0xf967fd2e, 0xfafd8d84, 0xfd19dee3],
    [0xfeaec8c5, 0x01d7c743, 0x02e5325d, 0x04791806, 0x04ffaa32, 0x069331a2, 0x07a00f67, 0x0933215c, 0x09b96d0c, 0x0c58726b, 0x0cde8f50, 0x110e5ea7, 0x129fcc72, 0x17d7eefc, 0x18e2cca8, 0x1c02ad6f],
    [0x1fa68206, 0x26e9cb86, 0x28777557, 0x2da3164d, 0x2eab75cf, 0x334fb096, 0x355f0862, 0x36ea3bfb, 0x37f18e84, 0x397c529a, 0x3d146e08, 0x3e9e5401, 0x4027f796, 0x42b774f8, 0x433a77ff, 0x45c91917],
    [0x48d9b5a8, 0x4ae436b6, 0x4d70b43b, 0x4df31def, 0x507ec1ac, 0x52878f2a, 0x5593ead1, 0x581d7132, 0x5e3171f4, 0x5eb2ee3a, 0x5fb5d164, 0x61bb424c, 0x633f0c59, 0x64416f91, 0x6645e0ff, 0x6ace42de],
    [0x6d51f484, 0x6ed3d7a4, 0x70557bb2, 0x70d5f9b7, 0x725749d4, 0x74d8ee6e, 0x77da0165, 0x785a16e8, 0x7ada1a77, 0x7c59c98b, 0x7dd93a71, 0x7f586d42, 0x8156fb4a, 0x82d59da5, 0x8552cdb8, 0x86d0cb9d],
    [0x87501293, 0x88cdbe80, 0x8a4b2d10, 0x8bc85e5b, 0x8e43289f, 0x903e8395, 0x962e0bed, 0x97a95682, 0x9d160e7d, 0x9d9425a5, 0xa201ca43, 0xa2fd6cd4, 0xa4f46262, 0xa768806a, 0xaec0fdcf, 0xb0b57b22],
    [0xb51a16ed, 0xb613b8fa, 0xb690803f, 0xb900032f, 0xba75d0bb, 0xbaf25da2, 0xbc67dd88, 0xbd60bd29, 0xc1bf6c75, 0xc3aff6c6, 0xc69805fe, 0xcaf26da3, 0xcecf51f1, 0xd041beea, 0xd0bd2be9, 0xd3a13533],
    [0xd512e4af, 0xd77a8b48, 0xd7f599bf, 0xda5c83fd, 0xdad76cd7, 0xdc4801dc, 0xdeadd29e, 0xe208245d, 0xe2fd2857, 0xe8b937c5, 0xe9336638, 0xed03fc15, 0xed7df325, 0xefdf6a71, 0xf0593cb7, 0xf2b9fc59],
    [0xf779b20f, 0xf86c8d65, 0xf8e5f1f4, 0xf9d8a8e1, 0xfbbdce06, 0xff86f622, 0x00f201ab, 0x025cd70d, 0x02d5bcd3, 0x05aaa175, 0x096fd86c, 0x0b51e4a9, 0x0c42c70d, 0x0dabee08, 0x14b690bd, 0x152e8e72],
    [0x17862aa0, 0x17fe0503, 0x196570ed, 0x1a54f0dc, 0x1bbc04cb, 0x1d22e40b, 0x1f011138, 0x206775d4, 0x2156466e, 0x24222ca3, 0x2587d159, 0x27645bd6, 0x2a2e7e15, 0x2b1c5b52, 0x2e5c2c45, 0x31244878],
    [0x337517c4, 0x39018fe2, 0x3a642de4, 0x3d28d0c6, 0x3e8ad5cc, 0x3f00cc2b, 0x4410ee18, 0x45e79782, 0x4a094cdf, 0x4c5426ef, 0x4db4007e, 0x50e83981, 0x51d260fc, 0x52476c6a, 0x53a66d7a, 0x55ef00ac],
    [0x57c2464b, 0x592080aa, 0x5a09e169, 0x5b67c952, 0x623a6d6e, 0x6567e2a9, 0x67ac4a3b, 0x68204ead, 0x6ad7f7a9, 0x6d1b1a8c, 0x6d8ede24, 0x712c3926, 0x719fcc57, 0x75af07e2, 0x7b160b89, 0x7f2157be],
    [0x807a11c5, 0x84106ebd, 0x88180466, 0x896f826d, 0x89e1f74a, 0x8de727a5, 0x8ecba39f, 0x90223680, 0x90945d0d, 0x92cecfcd, 0x9496ce28, 0x96d05788, 0x9825d24d, 0x997b1e99, 0x9b41e6d2, 0x9c252c09],
    [0x9d79ed4d, 0x9deb78c8, 0xa022e538, 0xa09451ef, 0xa33c72c4, 0xa41eff80, 0xa572ac58, 0xa6c62b55, 0xa7374b7b, 0xa9dda1a3, 0xaabf95c0, 0xadd5cc9a, 0xb1cc5e46, 0xb2ad9c8e, 0xb3ff5445, 0xb863c7e1],
    [0xb9446fba, 0xbb05837c, 0xbc561dee, 0xbd366bfc, 0xbef6cc64, 0xbfd6dec8, 0xc2e682e5, 0xc436113e, 0xc515acc3, 0xc823b1a3, 0xcac13eef, 0xcba046b9, 0xcc0fc343, 0xd295c3fc, 0xd3741bc2, 0xd8a89208],
    [0xd9f5427b, 0xdb41c764, 0xddda4ed4, 0xe07228c9, 0xe377cc65, 0xe4c313ba, 0xe59fd604, 0xe60e2ffc, 0xe6ead596, 0xeacad29a, 0xec15268e, 0xeea94e37, 0xf06109d3, 0xf1aaa4d6, 0xf28649e1, 0xf518c7bd],
    [0xf58676e2, 0xf8182ef3, 0xfe819859, 0x01eb55f6, 0x025878b6, 0x039fc512, 0x084e77dd, 0x0b482357, 0x0c8e4c39, 0x0ead89a6, 0x1138d560, 0x127e3d58, 0x12eaac2d, 0x13c37c1f, 0x1574e52a, 0x179241cc],
    [0x18d6dc4e, 0x1a1b4de0, 0x1f2b7bc1, 0x221e69aa, 0x2361b089, 0x24391e9a, 0x25e7c4c3, 0x286d374b, 0x2c3434c4, 0x2e4ccfeb, 0x2eb814c7, 0x30d02a4c, 0x313b5476, 0x32119b77, 0x3352e4ae, 0x3780b8d1],
    [0x38c15578, 0x3996fd2e, 0x3c823d74, 0x3d5795f5, 0x3dc23b9e, 0x3e9779c8, 0x4181494a, 0x42c0a9bb, 0x453ef4b8, 0x4a39b475, 0x4c4c2132, 0x4d8a2e7d, 0x4f3203b3, 0x51436d1e, 0x51ad4212, 0x57deb8a4],
    [0x58b1d4e5, 0x59ee5f34, 0x5a57da18, 0x5cd061d3, 0x5da317a3, 0x60840dfc, 0x61bfa592, 0x68b9311a, 0x6b2e3f53, 0x6cd14a15, 0x6e0b6619, 0x70169657, 0x707f2d09, 0x71504de3, 0x7564f7c5, 0x776eb093],
    [0x790fc675, 0x7c512b4d, 0x7cb9454a, 0x7ec18948, 0x81993b4e, 0x8268fffd, 0x82d0dc2a, 0x853faf02, 0x8676e114, 0x89b407ec, 0x8aeab31b, 0x8c88b39f, 0x8d579b73, 0x8ef53a51, 0x8fc3f161, 0x90f9e58b],
    [0x9296f25b, 0x93cc9179, 0x95020c35, 0x976c94b3, 0x98a1a28b, 0x996f97a7, 0x9aa4692a, 0x9bd91687, 0x9d747032, 0xa1110fc8, 0xa1de5ca1, 0xa5dfedcb, 0xa6acdb19, 0xa91343c2, 0xa9799ca9, 0xab791dcc],
    [0xacabd570, 0xad120ac1, 0xaf10da29, 0xb1755112, 0xb1db5720, 0xb2a75772, 0xb6a26dbd, 0xb7d3db4a, 0xbdc8f06d, 0xbef98b9a, 0xbfc48a50, 0xc15a5938, 0xc35544be, 0xc5b5130d, 0xc6e4c621, 0xc749fa1e],
    [0xccd13e4e, 0xcd3638af, 0xce6510dd, 0xcf2ee330, 0xcf93c69e, 0xd2ba58a2, 0xd516a61f, 0xd57b5064, 0xd6a93869, 0xd8a019e4, 0xda3223ae, 0xdee6d644, 0xe140640b, 0xe26cf830, 0xe5f1ea11, 0xe71df74c],
    [0xe7e5ed6f, 0xeaa15557, 0xebccdc41, 0xec9478ed, 0xeeeaf5be, 0xf079a967, 0xf1a4893e, 0xf3f9e50b, 0xf4c0e616, 0xf5eb4bfc, 0xf83fb44b, 0xf969b6c7, 0xfbbd5895, 0xfc209161, 0xff39d3ee, 0x03181e52],
    [0x03de0177, 0x0440ed95, 0x062f539f, 0x09a859e1, 0x0b331af5, 0x0bf865cf, 0x0eaa7a1b, 0x0f6f840a, 0x0fd2039b, 0x10f96cb8, 0x1533844e, 0x165a56c0, 0x1909c4ac, 0x1a302bf4, 0x1b56732a, 0x1d40a2a9],
    [0x1e669481, 0x1ec888af, 0x20b21860, 0x2113f748, 0x21d7aa78, 0x22397ec2, 0x266cb4b5, 0x26ce5ea0, 0x2791a7e5, 0x28b67b68, 0x29db2f45, 0x2c243830, 0x2d488d50, 0x2ff22ec5, 0x31d8a6ff, 0x341ff76b],
    [0x354370a4, 0x36c7e19c, 0x378a0544, 0x3e5ad6f9, 0x4100336d, 0x434445b2, 0x4466207e, 0x45274be1, 0x4648f346, 0x46a97990, 0x48ec577c, 0x4a0d9859, 0x4c4fbe09, 0x4f51dc6d, 0x4fb210f0, 0x5192e4a6],
    [0x5313510d, 0x5733645e, 0x579351e3, 0x59d29c4d, 0x5af2141e, 0x5bb1a88a, 0x5cd0ee02, 0x602e0987, 0x608da687, 0x62cb0e6c, 0x63e99559, 0x64a88950, 0x66e5155e, 0x686285a2, 0x69807700, 0x6bbc004e],
    [0x6c7a68f1, 0x6d97ed1e, 0x6fd29c5e, 0x70efc782, 0x714ecf4d, 0x7388b907, 0x75c22c8f, 0x767fe383, 0x79177cc3, 0x7a33b1fd, 0x7d2905c2, 0x7e44cf70, 0x7ea3617f, 0x807c0b0c, 0x81f5f1e0, 0x85477bc8],
    [0x86626f8f, 0x8ca3b128, 0x8d01c542, 0x92258e4e, 0x92837265, 0x968b6cf3, 0x97a49cfb, 0x9802514c, 0x99d6a746, 0x9c083f6a, 0x9c65cdb0, 0x9d7e6587, 0x9e39659e, 0x9faf3fe8, 0xa3b25428, 0xa4ca2ee5],
    [0xa5277186, 0xa6f98f9e, 0xa86e3c14, 0xa9287f88, 0xaa3fcd40, 0xabb40924, 0xac6e145c, 0xae9beb36, 0xb1dfdb7c, 0xb40c9aa7, 0xb7ab8c48, 0xb864cabb, 0xb97a9146, 0xba903c14, 0xbc024a0d, 0xbcbb3e96],
    [0xbd17b43e, 0xbffaf2ff, 0xc224e158, 0xc2812907, 0xc44e619c, 0xc5bf24bb, 0xc78bd40e, 0xc7e7edfd, 0xc8a018ba, 0xc9b44208, 0xcc383828, 0xce5fb97d, 0xd251b69d, 0xd3c0a0e6, 0xd8c35a08, 0xd91ee309],
    [0xd9d5ec0e, 0xdd6865b0, 0xde1f26f9, 0xde7a8324, 0xdf313288, 0xe1b03a9b, 0xe37854e2, 0xe59b45ae, 0xe5f66370, 0xe818d7d4, 0xeaf0cd85, 0xeb4bbef4, 0xf043bdf7, 0xf1aec1a5, 0xf5941a27, 0xf6fe6e4b],
    [0xf7b386db, 0xf8c315d7, 0xf9d28a9d, 0xfc4b8a9f, 0xfd004be9, 0xfe69abad, 0x0087646a, 0x019619b9, 0x02a4b506, 0x03590e1f, 0x06de1ea7, 0x0792329e, 0x0abbfe47, 0x0b15ea1e, 0x0d313506, 0x0e3eb3da],
    [0x0ef24f74, 0x0fffa36f, 0x1273ae3f, 0x159a5cf1, 0x175a21b4, 0x18c025b0, 0x1a7f6afa, 0x2014d4c8, 0x21208859, 0x22de7b71, 0x23e9eb9f, 0x24f54292, 0x254e59f4, 0x26598f4d, 0x2921a28d, 0x2a2c7bb5],
];

const SBOX: [u32; 16] = [3, 8, 15, 1, 10, 6, 5, 11, 14, 13, 4, 2, 7, 0, 9, 12];

const fn alpha(x: u32, y: u32) -> [u32; 32] {
    let mut t = [0u32; 32];
    let mut i = 0;
    while i < 32 {
        let base = if i % 2 == 0 { x } else { y };
        t[i] = base.rotate_left(i as u32);
        i += 1;
    }
    t
}

/// Round constants for the normal and final permutations.
const ALPHA_N: [u32; 32] = alpha(0xff00f0f0, 0xccccaaaa);
const ALPHA_F: [u32; 32] = alpha(0xcaf9639c, 0x0ff0f9c0);

/// Expand a message block: XOR of the rows selected by its bits.
fn expand(block: &[u8; BLOCK]) -> [u32; 16] {
    let mut m = [0u32; 16];
    for (byte_idx, byte) in block.iter().enumerate() {
        for bit in 0..8 {
            if byte & (0x80 >> bit) != 0 {
                let row = &T[byte_idx * 8 + bit];
                for i in 0..16 {
                    m[i] ^= row[i];
                }
            }
        }
    }
    m
}

/// Interleave expanded message and chaining words into the 4x8 state.
fn concat(m: &[u32; 16], c: &[u32; 16]) -> [u32; 32] {
    let mut s = [0u32; 32];
    for group in 0..8 {
        let (first, second) = if group % 2 == 0 {
            (m, c)
        } else {
            (c, m)
        };
        s[group * 4] = first[group * 2];
        s[group * 4 + 1] = first[group * 2 + 1];
        s[group * 4 + 2] = second[group * 2];
        s[group * 4 + 3] = second[group * 2 + 1];
    }
    s
}

/// Bitsliced S-box over one column of four words.
#[inline]
fn sbox_column(s: &mut [u32; 32], col: usize) {
    let idx = [col, col + 8, col + 16, col + 24];
    let mut out = [0u32; 4];
    for bit in 0..32 {
        let nibble = ((s[idx[0]] >> bit) & 1)
            | (((s[idx[1]] >> bit) & 1) << 1)
            | (((s[idx[2]] >> bit) & 1) << 2)
            | (((s[idx[3]] >> bit) & 1) << 3);
        let v = SBOX[nibble as usize];
        for (j, o) in out.iter_mut().enumerate() {
            *o |= ((v >> j) & 1) << bit;
        }
    }
    for (j, &i) in idx.iter().enumerate() {
        s[i] = out[j];
    }
}

/// Serpent-style diffusion over four words.
#[inline]
fn linear(a: &mut u32, b: &mut u32, c: &mut u32, d: &mut u32) {
    *a = a.rotate_left(13);
    *c = c.rotate_left(3);
    *b ^= *a ^ *c;
    *d ^= *c ^ (*a << 3);
    *b = b.rotate_left(1);
    *d = d.rotate_left(7);
    *a ^= *b ^ *d;
    *c ^= *d ^ (*b << 7);
    *a = a.rotate_left(5);
    *c = c.rotate_left(22);
}

fn permute(s: &mut [u32; 32], rounds: usize, alpha: &[u32; 32]) {
    for round in 0..rounds {
        for i in 0..32 {
            s[i] ^= alpha[i];
        }
        s[1] ^= round as u32;
        for col in 0..8 {
            sbox_column(s, col);
        }
        for col in 0..8 {
            let i0 = col;
            let i1 = (col + 1) % 8 + 8;
            let i2 = (col + 2) % 8 + 16;
            let i3 = (col + 3) % 8 + 24;
            let (mut a, mut b, mut c, mut d) = (s[i0], s[i1], s[i2], s[i3]);
            linear(&mut a, &mut b, &mut c, &mut d);
            s[i0] = a;
            s[i1] = b;
            s[i2] = c;
            s[i3] = d;
        }
    }
}

/// Positions of the chaining words inside the interleaved state.
fn chaining_positions() -> [usize; 16] {
    let mut pos = [0usize; 16];
    for group in 0..8 {
        let base = group * 4 + if group % 2 == 0 { 2 } else { 0 };
        pos[group * 2] = base;
        pos[group * 2 + 1] = base + 1;
    }
    pos
}

fn absorb(c: &mut [u32; 16], block: &[u8; BLOCK], rounds: usize, alpha: &[u32; 32]) {
    let m = expand(block);
    let mut s = concat(&m, c);
    permute(&mut s, rounds, alpha);
    let pos = chaining_positions();
    for i in 0..16 {
        c[i] ^= s[pos[i]];
    }
}

pub fn digest(input: &[u8]) -> [u8; 64] {
    let mut c = IV;

    let mut chunks = input.chunks_exact(BLOCK);
    for chunk in &mut chunks {
        absorb(&mut c, chunk.try_into().expect("exact 8-byte chunk"), ROUNDS, &ALPHA_N);
    }

    // Padding: 0x80 then zeros, followed by the 64-bit message bit length
    // as its own final block.
    let rem = chunks.remainder();
    let mut tail = [0u8; BLOCK];
    tail[..rem.len()].copy_from_slice(rem);
    tail[rem.len()] = 0x80;
    absorb(&mut c, &tail, ROUNDS, &ALPHA_N);

    let bit_len = ((input.len() as u64).wrapping_mul(8)).to_be_bytes();
    absorb(&mut c, &bit_len, FINAL_ROUNDS, &ALPHA_F);

    let mut out = [0u8; 64];
    for i in 0..16 {
        out[i * 4..i * 4 + 4].copy_from_slice(&c[i].to_be_bytes());
    }
    out
}
